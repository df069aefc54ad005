/*
[INPUT]:  TaskBoard state, poll events, log buffer
[OUTPUT]: TuiState helpers for rendering, selection, and modal flows
[POS]:    TUI app state and interaction glue
[UPDATE]: When adding tabs, modals, or selection behavior
*/

use ratatui::widgets::ListState;

use crate::controller::{Confirmed, TaskBoard};
use crate::poller::PollEvent;
use crate::tui::runtime::LogBufferHandle;
use crate::tui::ui::modal::{ConfirmAction, ConfirmModal, NewTaskModal};

pub(super) enum ActiveModal {
    NewTask(NewTaskModal),
    Confirm(ConfirmModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Board,
    Logs,
}

pub(super) struct TuiState {
    pub(super) board: TaskBoard,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) list_state: ListState,
    pub(super) current_tab: Tab,
    pub(super) active_modal: Option<ActiveModal>,
}

impl TuiState {
    pub(super) fn new(board: TaskBoard, log_buffer: LogBufferHandle) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            board,
            log_buffer,
            list_state,
            current_tab: Tab::Board,
            active_modal: None,
        }
    }

    /// Per-tick housekeeping: expire notifications, keep selection in range
    pub(super) fn on_tick(&mut self) {
        self.board.sweep_notifications();
        self.clamp_selection();
    }

    /// Apply a background poll result on the runtime loop's turn
    pub(super) fn apply_poll_event(&mut self, event: PollEvent) {
        match event {
            PollEvent::Tasks(result) => self.board.apply_loaded(result),
            PollEvent::Health(result) => self.board.apply_health(result),
        }
        self.clamp_selection();
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let count = self.board.visible_tasks().len();
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (count - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Id of the task under the cursor, respecting the active filter
    pub(super) fn selected_task_id(&self) -> Option<i64> {
        let visible = self.board.visible_tasks();
        let index = self.list_state.selected()?;
        visible.get(index).map(|task| task.id)
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Board => Tab::Logs,
            Tab::Logs => Tab::Board,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    /// Open the new-task form, carrying over any retained draft
    pub(super) fn open_new_task(&mut self) {
        let draft = self.board.draft();
        self.active_modal = Some(ActiveModal::NewTask(NewTaskModal::new(
            draft.title.clone(),
            draft.description.clone(),
        )));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    /// Ask for confirmation before deleting the task under the cursor
    pub(super) fn request_delete_selected(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        let title = self
            .board
            .tasks()
            .iter()
            .find(|task| task.id == task_id)
            .map(|task| task.title.clone())
            .unwrap_or_default();
        self.active_modal = Some(ActiveModal::Confirm(ConfirmModal::new(
            "Delete task",
            format!("Delete \"{title}\"? This cannot be undone."),
            ConfirmAction::DeleteTask { task_id },
        )));
    }

    /// Store the form fields into the draft and submit it.
    ///
    /// The modal closes only when the draft was cleared, i.e. the server
    /// accepted the task; otherwise the form stays open for a retry.
    pub(super) async fn submit_new_task(&mut self, title: String, description: String) {
        let draft = self.board.draft_mut();
        draft.title = title;
        draft.description = description;
        self.board.add_task().await;
        if self.board.draft().title.is_empty() {
            self.close_modal();
            self.clamp_selection();
        }
    }

    /// Stash the form fields so the draft survives a cancelled dialog
    pub(super) fn stash_draft(&mut self, title: String, description: String) {
        let draft = self.board.draft_mut();
        draft.title = title;
        draft.description = description;
    }

    pub(super) async fn run_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteTask { task_id } => {
                self.board.delete_task(task_id, &Confirmed).await;
            }
        }
        self.clamp_selection();
    }

    pub(super) async fn complete_selected(&mut self) {
        if let Some(task_id) = self.selected_task_id() {
            self.board.complete_task(task_id).await;
        }
    }

    pub(super) async fn refresh(&mut self) {
        self.board.load_tasks().await;
        self.clamp_selection();
    }

    pub(super) fn cycle_filter(&mut self) {
        self.board.cycle_filter();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.board.visible_tasks().len();
        if count == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.min(count - 1)));
        }
    }
}
