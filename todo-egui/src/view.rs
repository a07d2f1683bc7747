//! View Model
//!
//! The structured description of what the widget shows for a given state.
//! Building it is a pure function; the egui components only draw it.

use serde::Serialize;

use crate::config::WidgetConfig;
use crate::state::{TodoId, TodoState};

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoView {
    pub title: String,
    pub input: InputView,
    pub entries: Vec<EntryView>,
    /// Set exactly when `entries` is empty.
    pub empty_message: Option<String>,
}

/// The text field and the commit button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub draft: String,
    pub placeholder: String,
    pub add_label: String,
}

/// One list row and its two controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub id: TodoId,
    pub text: String,
    /// Drawn struck-through and muted when set.
    pub completed: bool,
    pub toggle_title: String,
    pub delete_title: String,
}

impl TodoView {
    /// Describe `state` using the texts from `config`.
    pub fn render(state: &TodoState, config: &WidgetConfig) -> Self {
        let entries: Vec<EntryView> = state
            .items
            .iter()
            .map(|item| EntryView {
                id: item.id,
                text: item.text.clone(),
                completed: item.completed,
                toggle_title: if item.completed {
                    config.toggle_incomplete_title.clone()
                } else {
                    config.toggle_complete_title.clone()
                },
                delete_title: config.delete_title.clone(),
            })
            .collect();

        let empty_message = entries.is_empty().then(|| config.empty_message.clone());

        Self {
            title: config.title.clone(),
            input: InputView {
                draft: state.draft.clone(),
                placeholder: config.placeholder.clone(),
                add_label: config.add_label.clone(),
            },
            entries,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TodoStore;

    fn store_with(texts: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for text in texts {
            store.set_draft(*text);
            store.add_todo();
        }
        store
    }

    #[test]
    fn empty_state_shows_message() {
        let view = TodoView::render(&TodoState::default(), &WidgetConfig::default());

        assert!(view.entries.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("No tasks yet. Add a new task above!")
        );
        assert_eq!(view.title, "Todo List");
        assert_eq!(view.input.placeholder, "Enter a new task");
    }

    #[test]
    fn entries_hide_message() {
        let store = store_with(&["Buy milk"]);
        let view = TodoView::render(store.state(), &WidgetConfig::default());

        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].text, "Buy milk");
        assert!(!view.entries[0].completed);
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn toggle_title_follows_completion() {
        let mut store = store_with(&["A", "B"]);
        let a = store.state().items[0].id;
        store.toggle_todo(a);

        let view = TodoView::render(store.state(), &WidgetConfig::default());

        assert_eq!(view.entries[0].toggle_title, "Mark as incomplete");
        assert_eq!(view.entries[1].toggle_title, "Mark as complete");
        assert!(view.entries.iter().all(|e| e.delete_title == "Delete task"));
    }

    #[test]
    fn draft_is_passed_through_verbatim() {
        let mut store = TodoStore::new();
        store.set_draft("  half typed");

        let view = TodoView::render(store.state(), &WidgetConfig::default());

        assert_eq!(view.input.draft, "  half typed");
    }

    #[test]
    fn render_is_pure() {
        let store = store_with(&["A", "B"]);
        let config = WidgetConfig::default();

        assert_eq!(
            TodoView::render(store.state(), &config),
            TodoView::render(store.state(), &config)
        );
    }

    #[test]
    fn serializes_as_markup_tree() {
        let store = store_with(&["X"]);
        let view = TodoView::render(store.state(), &WidgetConfig::default());
        let value = serde_json::to_value(view).unwrap();

        assert_eq!(value["entries"][0]["text"], "X");
        assert_eq!(value["entries"][0]["id"], 1);
        assert!(value["empty_message"].is_null());
        assert_eq!(value["input"]["add_label"], "Add");
    }
}
