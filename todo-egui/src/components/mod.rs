//! UI Components
//!
//! egui widgets that draw a [`TodoView`](crate::view::TodoView) and collect the
//! actions triggered by user input. They never mutate state themselves.

mod input;
mod list;

pub use input::{TODO_INPUT_ID, todo_input};
pub use list::todo_list;
