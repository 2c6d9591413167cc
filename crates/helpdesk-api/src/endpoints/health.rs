use crate::client::HelpdeskClient;
use crate::error::ApiError;
use crate::models::{HealthStatus, VersionInfo};

impl HelpdeskClient {
    /// `GET /public/health`
    pub async fn check_health(&self) -> Result<HealthStatus, ApiError> {
        self.get("public/health").await
    }

    /// `GET /public/version`
    pub async fn get_version(&self) -> Result<VersionInfo, ApiError> {
        self.get("public/version").await
    }
}
