//! Todo App
//!
//! Ties the store to the egui components. Each frame renders the view model
//! for the current state, then dispatches the actions the user triggered.

use crate::components::{todo_input, todo_list};
use crate::config::WidgetConfig;
use crate::state::{SubscriptionId, TodoAction, TodoStore};
use crate::view::TodoView;

/// The todo list widget.
#[derive(Debug)]
pub struct TodoApp {
    store: TodoStore,
    config: WidgetConfig,
    repaint: Option<SubscriptionId>,
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl TodoApp {
    /// Create a widget with an empty list.
    pub fn new(config: WidgetConfig) -> Self {
        let mut store = TodoStore::new();
        store.subscribe(|state| {
            tracing::trace!(
                items = state.len(),
                completed = state.completed_count(),
                "todo state changed"
            );
        });

        Self {
            store,
            config,
            repaint: None,
        }
    }

    /// Request a repaint of `ctx` whenever the state changes.
    ///
    /// Calling this again replaces the previous binding.
    pub fn with_repaint(mut self, ctx: &egui::Context) -> Self {
        if let Some(previous) = self.repaint.take() {
            self.store.unsubscribe(previous);
        }

        let ctx = ctx.clone();
        self.repaint = Some(self.store.subscribe(move |_| ctx.request_repaint()));
        self
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TodoStore {
        &mut self.store
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The view model for the current state.
    pub fn view(&self) -> TodoView {
        TodoView::render(self.store.state(), &self.config)
    }

    /// Render one frame and apply the resulting actions.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let view = self.view();
        let mut actions: Vec<TodoAction> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let width = ui.available_width().min(self.config.max_width);
            let margin = ((ui.available_width() - width) / 2.0).max(0.0);

            ui.horizontal_top(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(width);

                    ui.vertical_centered(|ui| {
                        ui.heading(&view.title);
                    });
                    ui.add_space(8.0);

                    todo_input(ui, &view.input, &mut actions);
                    ui.add_space(12.0);

                    todo_list(ui, &view, &mut actions);
                });
            });
        });

        for action in actions {
            self.store.dispatch(action);
        }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
