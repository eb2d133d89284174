// Read-only queries, always scoped by the requesting identity.
// Mutations live in crate::services.
pub mod tasks;
pub mod users;
