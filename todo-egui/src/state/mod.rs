//! State Management
//!
//! - `TodoState` - The todo list and the input draft
//! - `TodoStore` - Applies the state transitions and notifies observers

mod store;
mod todo;

pub use store::{IdGenerator, SubscriptionId, TodoStore};
pub use todo::{TodoAction, TodoId, TodoItem, TodoState};
