/*
[INPUT]:  Crossterm key codes and modal state
[OUTPUT]: Key routing into board operations and modal flows
[POS]:    TUI event handling
[UPDATE]: When adding hotkeys or modal interactions
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, Tab, TuiState};
use super::ui::modal::{ConfirmAction, ConfirmAnswer, ModalAction};

enum ModalOutcome {
    None,
    CloseKeepDraft { title: String, description: String },
    Submit { title: String, description: String },
    ConfirmYes(ConfirmAction),
    ConfirmNo,
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut TuiState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        handle_modal_key_event(app, key).await;
        return false;
    }

    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('r') => {
            app.refresh().await;
            false
        }
        KeyCode::Char('a') => {
            // Mutating actions stay disabled while one is in flight
            if !app.board.is_busy() {
                app.open_new_task();
            }
            false
        }
        KeyCode::Char('c') => {
            if !app.board.is_busy() {
                app.complete_selected().await;
            }
            false
        }
        KeyCode::Char('d') => {
            if !app.board.is_busy() {
                app.request_delete_selected();
            }
            false
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
            false
        }
        KeyCode::Tab | KeyCode::Char('l') => {
            app.next_tab();
            false
        }
        KeyCode::Char('1') => {
            app.set_tab(Tab::Board);
            false
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Logs);
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

async fn handle_modal_key_event(app: &mut TuiState, key: KeyCode) {
    let outcome = match app.active_modal_mut() {
        Some(ActiveModal::NewTask(modal)) => match modal.handle_key(key) {
            ModalAction::Submit => ModalOutcome::Submit {
                title: modal.title().to_string(),
                description: modal.description().to_string(),
            },
            ModalAction::Cancel => ModalOutcome::CloseKeepDraft {
                title: modal.title().to_string(),
                description: modal.description().to_string(),
            },
            ModalAction::None => ModalOutcome::None,
        },
        Some(ActiveModal::Confirm(modal)) => match modal.handle_key(key) {
            ConfirmAnswer::Yes => ModalOutcome::ConfirmYes(modal.action()),
            ConfirmAnswer::No => ModalOutcome::ConfirmNo,
            ConfirmAnswer::Pending => ModalOutcome::None,
        },
        None => ModalOutcome::None,
    };

    match outcome {
        ModalOutcome::None => {}
        ModalOutcome::CloseKeepDraft { title, description } => {
            app.stash_draft(title, description);
            app.close_modal();
        }
        ModalOutcome::Submit { title, description } => {
            app.submit_new_task(title, description).await;
        }
        ModalOutcome::ConfirmYes(action) => {
            app.close_modal();
            app.run_confirmed(action).await;
        }
        ModalOutcome::ConfirmNo => {
            // Declined: no network call, no mutation
            app.close_modal();
        }
    }
}
