/*
[INPUT]:  New task form state and key events
[OUTPUT]: New task modal rendering and submit/cancel actions
[POS]:    TUI UI modal - new task form
[UPDATE]: When changing form fields or validation flow
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct NewTaskModal {
    title: String,
    description: String,
    focus_index: usize,
}

impl NewTaskModal {
    /// Open the form seeded with the retained draft
    pub(in crate::tui) fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("New Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title"),
                    value: self.title.clone(),
                },
                Field::TextInput {
                    label: String::from("Description"),
                    value: self.description.clone(),
                },
                Field::Button {
                    label: String::from("Add"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    pub(in crate::tui) fn title(&self) -> &str {
        self.title.as_str()
    }

    pub(in crate::tui) fn description(&self) -> &str {
        self.description.as_str()
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.title = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(1) {
            self.description = value.clone();
        }
    }
}
