/*
[INPUT]:  Task identifiers and creation payloads
[OUTPUT]: Task collection data and per-task mutation results
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TaskdeckClient};
use crate::types::{NewTaskRequest, Task};
use reqwest::Method;

impl TaskdeckClient {
    /// Fetch the full task collection
    ///
    /// GET /api/tasks/
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.api_request(Method::GET, "/api/tasks/")?;
        self.send_json(builder).await
    }

    /// Create a task and return the server's representation
    ///
    /// POST /api/tasks/
    pub async fn create_task(&self, request: &NewTaskRequest) -> Result<Task> {
        let builder = self.api_request(Method::POST, "/api/tasks/")?.json(request);
        self.send_json(builder).await
    }

    /// Mark a task completed and return the updated representation
    ///
    /// PUT /api/tasks/{id}/complete; 404 if the id is unknown
    pub async fn complete_task(&self, id: i64) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}/complete", id);
        let builder = self.api_request(Method::PUT, &endpoint)?;
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /api/tasks/{id}; 404 if the id is unknown
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_unit(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskdeckClient, TaskdeckError};
    use crate::types::{NewTaskRequest, Task};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TaskdeckClient {
        TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "id": 2,
                "title": "review patch",
                "description": null,
                "completed": false,
                "created_at": "2026-03-02 10:00:00"
            },
            {
                "id": 1,
                "title": "write patch",
                "description": "the easy part",
                "completed": true,
                "created_at": "2026-03-01 09:00:00"
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/tasks/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client.list_tasks().await.expect("list_tasks failed");

        let expected = vec![
            Task {
                id: 2,
                title: "review patch".to_string(),
                description: None,
                completed: false,
                created_at: "2026-03-02 10:00:00".to_string(),
            },
            Task {
                id: 1,
                title: "write patch".to_string(),
                description: Some("the easy part".to_string()),
                completed: true,
                created_at: "2026-03-01 09:00:00".to_string(),
            },
        ];

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_create_task_sends_null_description() {
        let server = MockServer::start().await;
        let request = NewTaskRequest::new("water plants", None);

        let _mock = Mock::given(method("POST"))
            .and(path("/api/tasks/"))
            .and(body_json(serde_json::json!({
                "title": "water plants",
                "description": null,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "id": 5,
                    "title": "water plants",
                    "description": null,
                    "completed": false,
                    "created_at": "2026-03-02 11:30:00",
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let created = client.create_task(&request).await.expect("create_task failed");
        assert_eq!(created.id, 5);
        assert_eq!(created.title, "water plants");
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn test_complete_task() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("PUT"))
            .and(path("/api/tasks/3/complete"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "id": 3,
                    "title": "file taxes",
                    "description": null,
                    "completed": true,
                    "created_at": "2026-03-01 09:00:00",
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let updated = client.complete_task(3).await.expect("complete_task failed");
        assert_eq!(updated.id, 3);
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_complete_task_not_found() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("PUT"))
            .and(path("/api/tasks/99/complete"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.complete_task(99).await.expect_err("expected 404");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_task_no_content() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/api/tasks/4"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_task(4).await.expect("delete_task failed");
    }

    #[tokio::test]
    async fn test_delete_task_not_found() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/api/tasks/99"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.delete_task(99).await.expect_err("expected 404");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_carries_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/tasks/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database locked"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.list_tasks().await.expect_err("expected 500");
        match err {
            TaskdeckError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database locked");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
