pub mod format;

pub use format::{TaskView, UserView};
