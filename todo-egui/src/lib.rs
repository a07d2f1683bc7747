//! todo-egui: an in-memory todo list widget for egui.
//!
//! The widget keeps an ordered list of todo items plus the text currently typed
//! into its input field. Items can be added, toggled complete, and deleted;
//! nothing is persisted.
//!
//! # Layout
//!
//! - [`state`] - `TodoStore`, the state container with the four operations
//!   and an observer registry
//! - [`view`] - `TodoView`, the pure description of what a state looks like
//! - [`components`] - egui widgets that draw a view and collect `TodoAction`s
//! - [`TodoApp`] - the `eframe::App` that wires the three together
//!
//! # Example
//!
//! ```
//! use todo_egui::{TodoAction, TodoApp, WidgetConfig};
//!
//! let mut app = TodoApp::new(WidgetConfig::default());
//! let store = app.store_mut();
//! store.dispatch(TodoAction::SetDraft("Buy milk".into()));
//! store.dispatch(TodoAction::Add);
//!
//! let view = app.view();
//! assert_eq!(view.entries[0].text, "Buy milk");
//! assert!(view.empty_message.is_none());
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod view;

pub use app::TodoApp;
pub use components::TODO_INPUT_ID;
pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use state::{SubscriptionId, TodoAction, TodoId, TodoItem, TodoState, TodoStore};
pub use view::{EntryView, InputView, TodoView};
