// Mutation operations enforcing business invariants before persisting.
// Reads live in crate::selectors.
pub mod task_service;
pub mod user_service;

pub use task_service::{TaskChanges, TaskError, TaskService};
pub use user_service::{UserError, UserService};
