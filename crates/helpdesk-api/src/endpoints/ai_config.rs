use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

impl HelpdeskClient {
    pub async fn get_ai_configuration(&self) -> Result<Value, ApiError> {
        self.get("ai-configuration").await
    }

    pub async fn update_ai_configuration<B: Serialize + ?Sized>(
        &self,
        configuration: &B,
    ) -> Result<Value, ApiError> {
        self.put("ai-configuration", configuration).await
    }
}
