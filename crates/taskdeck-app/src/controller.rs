/*
[INPUT]:  Adapter client results, draft input, confirmation answers, poll events
[OUTPUT]: Mutated board state plus notifications for every operation outcome
[POS]:    View-state layer - the single owner of the mirrored task list
[UPDATE]: When operation semantics or the surfaced messages change
*/

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Local};
use taskdeck_adapter::{HealthStatus, NewTaskRequest, Task, TaskdeckClient, TaskdeckError};
use tracing::{info, warn};

use crate::notify::{NotificationCenter, Severity};

/// Synchronous yes/no gate asked before destructive operations.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Confirmation already collected from the user (e.g. a dialog answered yes).
pub struct Confirmed;

impl ConfirmPrompt for Confirmed {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Canned answer, for headless flows and tests.
pub struct StaticAnswer(pub bool);

impl ConfirmPrompt for StaticAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Which slice of the board is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn next(self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// Unsaved input for a new task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// View-state controller mirroring the server's task collection.
///
/// All mutation goes through the operation methods below; reads go through
/// the projection accessors. Failures never propagate: each attempt surfaces
/// exactly one notification and leaves the state usable.
#[derive(Debug)]
pub struct TaskBoard {
    client: Arc<TaskdeckClient>,
    tasks: Vec<Task>,
    draft: TaskDraft,
    filter: TaskFilter,
    loading: bool,
    busy: bool,
    health: Option<HealthStatus>,
    last_refreshed: Option<DateTime<Local>>,
    notifications: NotificationCenter,
}

impl TaskBoard {
    pub fn new(client: Arc<TaskdeckClient>) -> Self {
        Self {
            client,
            tasks: Vec::new(),
            draft: TaskDraft::default(),
            filter: TaskFilter::All,
            loading: false,
            busy: false,
            health: None,
            last_refreshed: None,
            notifications: NotificationCenter::new(),
        }
    }

    /// Reload the whole list from the server.
    ///
    /// On failure the previous list and refresh stamp stay untouched.
    pub async fn load_tasks(&mut self) {
        let client = Arc::clone(&self.client);
        self.loading = true;
        let result = client.list_tasks().await;
        self.loading = false;
        self.apply_loaded(result);
    }

    /// Apply a reload result, whether user-triggered or from the poller.
    pub fn apply_loaded(&mut self, result: Result<Vec<Task>, TaskdeckError>) {
        match result {
            Ok(mut tasks) => {
                sort_newest_first(&mut tasks);
                self.tasks = tasks;
                self.touch_refreshed();
                info!(count = self.tasks.len(), "task list reloaded");
            }
            Err(err) => {
                warn!(error = %err, "task reload failed");
                self.notifications
                    .notify("failed to load tasks", Severity::Danger);
            }
        }
    }

    /// Submit the current draft as a new task.
    ///
    /// A blank title is rejected locally without touching the network; the
    /// draft survives a failed submission.
    pub async fn add_task(&mut self) {
        let title = self.draft.title.trim().to_string();
        if title.is_empty() {
            self.notifications
                .notify("enter a task title", Severity::Warning);
            return;
        }
        let description = match self.draft.description.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        let request = NewTaskRequest::new(title, description);

        let client = Arc::clone(&self.client);
        self.busy = true;
        let result = client.create_task(&request).await;
        self.busy = false;

        match result {
            Ok(task) => {
                info!(id = task.id, "task created");
                self.tasks.insert(0, task);
                self.draft.clear();
                self.touch_refreshed();
                self.notifications.notify("task added", Severity::Success);
            }
            Err(err) => {
                warn!(error = %err, "task creation failed");
                self.notifications
                    .notify("failed to create task", Severity::Danger);
            }
        }
    }

    /// Mark a task completed and mirror the server's representation.
    pub async fn complete_task(&mut self, id: i64) {
        let client = Arc::clone(&self.client);
        self.busy = true;
        let result = client.complete_task(id).await;
        self.busy = false;

        match result {
            Ok(updated) => {
                // Absent id means a stale view; nothing is inserted.
                if let Some(position) = self.tasks.iter().position(|task| task.id == id) {
                    self.tasks[position] = updated;
                }
                self.touch_refreshed();
                self.notifications
                    .notify("task completed", Severity::Success);
            }
            Err(err) if err.is_not_found() => {
                warn!(id, "complete: task not found");
                self.notifications.notify("task not found", Severity::Danger);
            }
            Err(err) => {
                warn!(id, error = %err, "complete failed");
                self.notifications
                    .notify("failed to update task", Severity::Danger);
            }
        }
    }

    /// Delete a task after an explicit confirmation.
    ///
    /// A declined prompt issues no network call and mutates nothing.
    pub async fn delete_task(&mut self, id: i64, prompt: &dyn ConfirmPrompt) {
        if !prompt.confirm("Delete this task?") {
            return;
        }

        let client = Arc::clone(&self.client);
        self.busy = true;
        let result = client.delete_task(id).await;
        self.busy = false;

        match result {
            Ok(()) => {
                info!(id, "task deleted");
                self.tasks.retain(|task| task.id != id);
                self.touch_refreshed();
                self.notifications.notify("task deleted", Severity::Success);
            }
            Err(err) if err.is_not_found() => {
                warn!(id, "delete: task not found");
                self.notifications.notify("task not found", Severity::Danger);
            }
            Err(err) => {
                warn!(id, error = %err, "delete failed");
                self.notifications
                    .notify("failed to delete task", Severity::Danger);
            }
        }
    }

    /// Query the health endpoint once and store the outcome.
    pub async fn check_health(&mut self) {
        let client = Arc::clone(&self.client);
        let result = client.check_health().await;
        self.apply_health(result);
    }

    /// Store a health result; an unreachable endpoint degrades to a
    /// synthesized unhealthy snapshot.
    pub fn apply_health(&mut self, result: Result<HealthStatus, TaskdeckError>) {
        self.health = Some(match result {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "health check failed");
                HealthStatus::unhealthy_now()
            }
        });
    }

    // Projections

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks passing the current filter, board order preserved
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn health(&self) -> Option<&HealthStatus> {
        self.health.as_ref()
    }

    pub fn last_refreshed_label(&self) -> String {
        match self.last_refreshed {
            Some(stamp) => stamp.format("%H:%M:%S").to_string(),
            None => "never".to_string(),
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn sweep_notifications(&mut self) {
        self.notifications.sweep();
    }

    fn touch_refreshed(&mut self) {
        self.last_refreshed = Some(Local::now());
    }
}

/// Order tasks by creation time, newest first.
///
/// Stable; entries with unparseable stamps sort after parseable ones, by raw
/// string comparison among themselves.
fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| match (a.created_timestamp(), b.created_timestamp()) {
        (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, created_at: &str, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            completed,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut tasks = vec![
            task(1, "2026-03-01 09:00:00", false),
            task(3, "2026-03-03 09:00:00", false),
            task(2, "2026-03-02 09:00:00", true),
        ];
        sort_newest_first(&mut tasks);
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_mixed_timestamp_shapes() {
        let mut tasks = vec![
            task(1, "2026-03-01T09:00:00", false),
            task(2, "2026-03-02 09:00:00", false),
        ];
        sort_newest_first(&mut tasks);
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_unparseable_stamps_sink() {
        let mut tasks = vec![
            task(9, "garbage", false),
            task(1, "2026-03-01 09:00:00", false),
        ];
        sort_newest_first(&mut tasks);
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 9]);
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = TaskFilter::All;
        filter = filter.next();
        assert_eq!(filter, TaskFilter::Active);
        filter = filter.next();
        assert_eq!(filter, TaskFilter::Completed);
        filter = filter.next();
        assert_eq!(filter, TaskFilter::All);
    }

    #[test]
    fn test_projections() {
        let client = Arc::new(TaskdeckClient::new().expect("client"));
        let mut board = TaskBoard::new(client);
        board.apply_loaded(Ok(vec![
            task(1, "2026-03-01 09:00:00", true),
            task(2, "2026-03-02 09:00:00", false),
        ]));

        assert_eq!(board.total(), 2);
        assert_eq!(board.active_count(), 1);
        assert_eq!(board.completed_count(), 1);

        board.cycle_filter();
        assert_eq!(board.filter(), TaskFilter::Active);
        let visible: Vec<i64> = board.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_apply_loaded_failure_keeps_list() {
        let client = Arc::new(TaskdeckClient::new().expect("client"));
        let mut board = TaskBoard::new(client);
        board.apply_loaded(Ok(vec![task(1, "2026-03-01 09:00:00", false)]));
        let before = board.last_refreshed_label();

        board.apply_loaded(Err(TaskdeckError::NotFound));
        assert_eq!(board.total(), 1);
        assert_eq!(board.last_refreshed_label(), before);
        assert_eq!(board.notifications().current().len(), 1);
    }

    #[tokio::test]
    async fn test_add_task_blank_title_warns_without_network() {
        // Unreachable endpoint: a network attempt would surface as danger
        let client = Arc::new(
            TaskdeckClient::with_config_and_base_url(
                taskdeck_adapter::ClientConfig::default(),
                "http://127.0.0.1:9",
            )
            .expect("client"),
        );
        let mut board = TaskBoard::new(client);
        board.draft_mut().title = "   ".to_string();

        board.add_task().await;

        let visible = board.notifications().current();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].severity, Severity::Warning);
        assert!(!board.is_busy());
    }

    #[test]
    fn test_apply_health_failure_synthesizes_unhealthy() {
        let client = Arc::new(TaskdeckClient::new().expect("client"));
        let mut board = TaskBoard::new(client);
        board.apply_health(Err(TaskdeckError::NotFound));

        let health = board.health().expect("snapshot stored");
        assert_eq!(health.status, taskdeck_adapter::HealthState::Unhealthy);
    }
}
