//! Todo list data types.

use serde::Serialize;
use std::fmt;

/// Unique identifier for a todo item.
///
/// Ids are handed out by the store in strictly increasing order and are never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single committed todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Trimmed, never empty.
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub(crate) fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Everything the widget renders: the list and the uncommitted draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    /// Insertion order is display order.
    pub items: Vec<TodoItem>,
    /// Text in the input field, kept verbatim.
    pub draft: String,
}

impl TodoState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

/// A single state transition, as produced by the UI event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Commit the current draft as a new item.
    Add,
    /// Flip the completion flag of an item.
    Toggle(TodoId),
    /// Remove an item.
    Delete(TodoId),
    /// Replace the draft text.
    SetDraft(String),
}
