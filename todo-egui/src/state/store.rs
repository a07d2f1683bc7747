//! Todo Store
//!
//! Owns the todo list and the draft, applies the four state transitions, and
//! notifies subscribed observers whenever the state actually changes.

use super::todo::{TodoAction, TodoId, TodoItem, TodoState};

/// Strictly increasing id source. Never hands out the same id twice.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> TodoId {
        let id = TodoId::new(self.next);
        self.next += 1;
        id
    }
}

/// Handle returned by [`TodoStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&TodoState)>;

/// State container for the widget.
///
/// Every operation returns `true` when it changed the state. Observers run
/// synchronously, in subscription order, after each change and never after
/// a no-op.
pub struct TodoStore {
    state: TodoState,
    ids: IdGenerator,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("state", &self.state)
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TodoStore {
    /// Create an empty store with an empty draft.
    pub fn new() -> Self {
        Self {
            state: TodoState::default(),
            ids: IdGenerator::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Register an observer that runs after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&TodoState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Route a single action to its operation.
    pub fn dispatch(&mut self, action: TodoAction) -> bool {
        match action {
            TodoAction::Add => self.add_todo(),
            TodoAction::Toggle(id) => self.toggle_todo(id),
            TodoAction::Delete(id) => self.delete_todo(id),
            TodoAction::SetDraft(text) => self.set_draft(text),
        }
    }

    /// Commit the trimmed draft as a new item and clear the draft.
    ///
    /// A draft that is empty after trimming is silently ignored and left as is.
    pub fn add_todo(&mut self) -> bool {
        let text = self.state.draft.trim();
        if text.is_empty() {
            tracing::trace!("ignoring add with blank draft");
            return false;
        }

        let item = TodoItem::new(self.ids.next_id(), text.to_owned());
        tracing::debug!(id = %item.id, text = %item.text, "todo added");
        self.state.items.push(item);
        self.state.draft.clear();
        self.notify();
        true
    }

    /// Flip `completed` on the item with `id`. Order is unchanged.
    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        let Some(item) = self.state.items.iter_mut().find(|item| item.id == id) else {
            tracing::trace!(%id, "toggle of unknown todo");
            return false;
        };

        item.completed = !item.completed;
        tracing::debug!(%id, completed = item.completed, "todo toggled");
        self.notify();
        true
    }

    /// Remove the item with `id`, keeping the order of the rest.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.id != id);
        if self.state.items.len() == before {
            tracing::trace!(%id, "delete of unknown todo");
            return false;
        }

        tracing::debug!(%id, remaining = self.state.items.len(), "todo deleted");
        self.notify();
        true
    }

    /// Replace the draft verbatim. Trimming only happens on add.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.state.draft == text {
            return false;
        }

        self.state.draft = text;
        self.notify();
        true
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}
