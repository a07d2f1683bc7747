//! Draft input row: the text field and the Add button.

use egui::{Id, Key, TextEdit, Ui};

use crate::state::TodoAction;
use crate::view::InputView;

/// Id of the draft text field
pub const TODO_INPUT_ID: &str = "todo_draft_input";

/// Width reserved next to the text field for the Add button
const ADD_BUTTON_WIDTH: f32 = 56.0;

/// Draw the input row.
///
/// Every edit emits [`TodoAction::SetDraft`]; Enter in the field or a click on
/// the button emits [`TodoAction::Add`] and keeps the field focused.
pub fn todo_input(ui: &mut Ui, input: &InputView, actions: &mut Vec<TodoAction>) {
    let input_id = Id::new(TODO_INPUT_ID);

    ui.horizontal(|ui| {
        let mut draft = input.draft.clone();
        let text_edit = ui.add(
            TextEdit::singleline(&mut draft)
                .id(input_id)
                .hint_text(&input.placeholder)
                .desired_width((ui.available_width() - ADD_BUTTON_WIDTH).max(0.0)),
        );

        if text_edit.changed() {
            actions.push(TodoAction::SetDraft(draft));
        }

        let submitted = text_edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button(&input.add_label).clicked() || submitted {
            actions.push(TodoAction::Add);
            text_edit.request_focus();
        }
    });
}
