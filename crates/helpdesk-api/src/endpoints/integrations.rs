use serde::Serialize;
use serde_json::Value;

use super::metadata::AiAccessUpdate;
use crate::client::{HelpdeskClient, segment};
use crate::error::ApiError;

/// Item type requested when the caller does not name one.
pub const DEFAULT_ITEM_TYPE: &str = "PAGE";

impl HelpdeskClient {
    pub async fn get_all_third_party_integrations(&self) -> Result<Value, ApiError> {
        self.get("third-party-integrations").await
    }

    pub async fn get_active_third_party_integrations(&self) -> Result<Value, ApiError> {
        self.get("third-party-integrations/active").await
    }

    pub async fn get_third_party_integration(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("third-party-integrations/{id}")).await
    }

    pub async fn create_third_party_integration<B: Serialize + ?Sized>(
        &self,
        integration: &B,
    ) -> Result<Value, ApiError> {
        self.post("third-party-integrations", integration).await
    }

    pub async fn update_third_party_integration<B: Serialize + ?Sized>(
        &self,
        id: i64,
        integration: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("third-party-integrations/{id}"), integration)
            .await
    }

    pub async fn delete_third_party_integration(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("third-party-integrations/{id}")).await
    }

    pub async fn update_third_party_ai_access(
        &self,
        id: i64,
        ai_accessible: bool,
    ) -> Result<Value, ApiError> {
        self.put(
            &format!("third-party-integrations/{id}/ai-access"),
            &AiAccessUpdate { ai_accessible },
        )
        .await
    }

    pub async fn test_third_party_connection(&self, id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("third-party-integrations/{id}/test-connection"))
            .await
    }

    /// Lists items (pages, issues, ...) the integration can see.
    /// `item_type` defaults to [`DEFAULT_ITEM_TYPE`].
    pub async fn fetch_third_party_items(
        &self,
        id: i64,
        item_type: Option<&str>,
    ) -> Result<Value, ApiError> {
        let item_type = item_type.unwrap_or(DEFAULT_ITEM_TYPE);
        self.get_with_query(
            &format!("third-party-integrations/{id}/items"),
            &[("itemType", item_type.to_string())],
        )
        .await
    }

    // --- Blacklist (items hidden from the AI) ---

    pub async fn get_blacklisted_items(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("third-party-integrations/{id}/blacklist"))
            .await
    }

    pub async fn add_to_blacklist<B: Serialize + ?Sized>(
        &self,
        id: i64,
        item: &B,
    ) -> Result<Value, ApiError> {
        self.post(&format!("third-party-integrations/{id}/blacklist"), item)
            .await
    }

    pub async fn bulk_add_to_blacklist<B: Serialize>(
        &self,
        id: i64,
        items: &[B],
    ) -> Result<Value, ApiError> {
        self.post(
            &format!("third-party-integrations/{id}/blacklist/bulk"),
            items,
        )
        .await
    }

    pub async fn remove_from_blacklist(&self, id: i64, item_id: &str) -> Result<(), ApiError> {
        self.delete(&format!(
            "third-party-integrations/{id}/blacklist/{}",
            segment(item_id)
        ))
        .await
    }

    // --- OAuth ---

    pub async fn generate_oauth_url<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value, ApiError> {
        self.post("third-party-integrations/oauth/authorize", request)
            .await
    }

    pub async fn exchange_oauth_token<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value, ApiError> {
        self.post("third-party-integrations/oauth/token", request)
            .await
    }

    pub async fn get_available_integrations(&self) -> Result<Value, ApiError> {
        self.get("third-party-integrations/available").await
    }

    pub async fn get_oauth_app_config(&self, integration_type: &str) -> Result<Value, ApiError> {
        self.get(&format!(
            "third-party-integrations/oauth-config/{}",
            segment(integration_type)
        ))
        .await
    }
}
