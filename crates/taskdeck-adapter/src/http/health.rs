/*
[INPUT]:  Health endpoint query
[OUTPUT]: Server health snapshot
[POS]:    HTTP layer - health endpoint
[UPDATE]: When the health payload changes
*/

use crate::http::{Result, TaskdeckClient};
use crate::types::HealthStatus;
use reqwest::Method;

impl TaskdeckClient {
    /// Query the server health snapshot
    ///
    /// GET /api/health
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let builder = self.api_request(Method::GET, "/api/health")?;
        self.send_json(builder).await
    }
}
