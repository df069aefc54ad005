/*
[INPUT]:  Adapter client, polling periods, CancellationToken
[OUTPUT]: Background polling loops reporting results as channel events
[POS]:    Scheduling layer - periodic health checks and task reloads
[UPDATE]: When changing polling cadence or teardown guarantees
*/

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use taskdeck_adapter::{HealthStatus, Task, TaskdeckClient, TaskdeckError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Result of one poll round, applied on the runtime loop's turn.
///
/// Events are applied in arrival order; a slow response resolving after a
/// newer one simply loses (last-resolved-wins).
#[derive(Debug)]
pub enum PollEvent {
    Tasks(Result<Vec<Task>, TaskdeckError>),
    Health(Result<HealthStatus, TaskdeckError>),
}

/// Cancellation handle for a running poller.
///
/// Dropping the handle does not stop the loop; teardown is explicit.
#[derive(Debug)]
pub struct PollerHandle {
    name: &'static str,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the loop to stop after its current round
    pub fn cancel(&self) {
        self.shutdown.cancel();
    }

    /// Cancel and wait for the loop to exit
    pub async fn shutdown_and_wait(self) {
        self.shutdown.cancel();
        let _ = self.handle.await;
        debug!(poller = self.name, "poller shut down");
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn the fixed-interval task reload loop (first round fires immediately)
pub fn spawn_reload_poller(
    client: Arc<TaskdeckClient>,
    period: Duration,
    tx: mpsc::UnboundedSender<PollEvent>,
) -> PollerHandle {
    spawn_poller("task-reload", period, tx, move || {
        let client = Arc::clone(&client);
        async move { PollEvent::Tasks(client.list_tasks().await) }
    })
}

/// Spawn the fixed-interval health check loop (first round fires immediately)
pub fn spawn_health_poller(
    client: Arc<TaskdeckClient>,
    period: Duration,
    tx: mpsc::UnboundedSender<PollEvent>,
) -> PollerHandle {
    spawn_poller("health-check", period, tx, move || {
        let client = Arc::clone(&client);
        async move { PollEvent::Health(client.check_health().await) }
    })
}

fn spawn_poller<F, Fut>(
    name: &'static str,
    period: Duration,
    tx: mpsc::UnboundedSender<PollEvent>,
    poll_round: F,
) -> PollerHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = PollEvent> + Send + 'static,
{
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    let event = poll_round().await;
                    if tx.send(event).is_err() {
                        // Receiver gone; the runtime loop has exited
                        break;
                    }
                }
            }
        }
        debug!(poller = name, "poller loop exited");
    });

    PollerHandle {
        name,
        shutdown,
        handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_adapter::ClientConfig;
    use tokio::time::timeout;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> Arc<TaskdeckClient> {
        Arc::new(
            TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init"),
        )
    }

    #[tokio::test]
    async fn test_health_poller_emits_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "timestamp": "2026-03-02T12:00:00",
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let poller = spawn_health_poller(client, Duration::from_secs(60), tx);

        let event = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("first round within deadline")
            .expect("channel open");
        assert!(matches!(event, PollEvent::Health(Ok(_))));

        poller.shutdown_and_wait().await;
    }

    #[tokio::test]
    async fn test_reload_poller_reports_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let poller = spawn_reload_poller(client, Duration::from_secs(60), tx);

        let event = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("first round within deadline")
            .expect("channel open");
        assert!(matches!(event, PollEvent::Tasks(Err(_))));

        poller.shutdown_and_wait().await;
    }

    #[tokio::test]
    async fn test_cancel_stops_the_loop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "timestamp": "2026-03-02T12:00:00",
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let poller = spawn_health_poller(client, Duration::from_millis(20), tx);

        // Let at least one round complete, then cancel
        let _ = timeout(Duration::from_secs(5), rx.recv()).await;
        poller.shutdown_and_wait().await;

        // Drain anything already queued; afterwards the channel must close
        while rx.try_recv().is_ok() {}
        assert!(rx.recv().await.is_none());
    }
}
