//! The todo entries, or the empty-list message.

use egui::{Align, Layout, RichText, Ui};

use crate::state::TodoAction;
use crate::view::{EntryView, TodoView};

/// Draw every entry with its toggle and delete controls.
pub fn todo_list(ui: &mut Ui, view: &TodoView, actions: &mut Vec<TodoAction>) {
    if let Some(message) = &view.empty_message {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).weak());
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for entry in &view.entries {
                todo_entry(ui, entry, actions);
                ui.separator();
            }
        });
}

fn todo_entry(ui: &mut Ui, entry: &EntryView, actions: &mut Vec<TodoAction>) {
    ui.horizontal(|ui| {
        let text = if entry.completed {
            RichText::new(&entry.text).strikethrough().weak()
        } else {
            RichText::new(&entry.text)
        };
        ui.label(text);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("🗑").on_hover_text(&entry.delete_title).clicked() {
                actions.push(TodoAction::Delete(entry.id));
            }
            if ui.small_button("✔").on_hover_text(&entry.toggle_title).clicked() {
                actions.push(TodoAction::Toggle(entry.id));
            }
        });
    });
}
