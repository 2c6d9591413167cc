use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AiAccessUpdate {
    pub ai_accessible: bool,
}

impl HelpdeskClient {
    // --- Connections ---

    pub async fn get_all_metadata_connections(&self) -> Result<Value, ApiError> {
        self.get("metadata/connections").await
    }

    pub async fn get_active_metadata_connections(&self) -> Result<Value, ApiError> {
        self.get("metadata/connections/active").await
    }

    pub async fn get_metadata_connection(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("metadata/connections/{id}")).await
    }

    pub async fn create_metadata_connection<B: Serialize + ?Sized>(
        &self,
        connection: &B,
    ) -> Result<Value, ApiError> {
        self.post("metadata/connections", connection).await
    }

    pub async fn update_metadata_connection<B: Serialize + ?Sized>(
        &self,
        id: i64,
        connection: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("metadata/connections/{id}"), connection)
            .await
    }

    pub async fn delete_metadata_connection(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("metadata/connections/{id}")).await
    }

    /// Has the backend call the connection's endpoint and report whether it
    /// answered.
    pub async fn test_metadata_connection(&self, id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("metadata/connections/{id}/test"))
            .await
    }

    // --- Field mappings ---

    pub async fn get_metadata_mappings(&self, connection_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("metadata/connections/{connection_id}/mappings"))
            .await
    }

    pub async fn get_active_metadata_mappings(&self, connection_id: i64) -> Result<Value, ApiError> {
        self.get(&format!(
            "metadata/connections/{connection_id}/mappings/active"
        ))
        .await
    }

    /// Replaces every mapping of a connection with `mappings`.
    pub async fn save_metadata_mappings<B: Serialize>(
        &self,
        connection_id: i64,
        mappings: &[B],
    ) -> Result<Value, ApiError> {
        self.post(
            &format!("metadata/connections/{connection_id}/mappings"),
            mappings,
        )
        .await
    }

    pub async fn create_metadata_mapping<B: Serialize + ?Sized>(
        &self,
        mapping: &B,
    ) -> Result<Value, ApiError> {
        self.post("metadata/mappings", mapping).await
    }

    pub async fn update_metadata_mapping<B: Serialize + ?Sized>(
        &self,
        id: i64,
        mapping: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("metadata/mappings/{id}"), mapping).await
    }

    pub async fn delete_metadata_mapping(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("metadata/mappings/{id}")).await
    }

    pub async fn get_all_mappings_for_ai_access(&self) -> Result<Value, ApiError> {
        self.get("metadata/mappings/ai-access").await
    }

    pub async fn update_ai_access(
        &self,
        mapping_id: i64,
        ai_accessible: bool,
    ) -> Result<Value, ApiError> {
        self.put(
            &format!("metadata/mappings/{mapping_id}/ai-access"),
            &AiAccessUpdate { ai_accessible },
        )
        .await
    }

    /// Sets AI visibility for many mappings at once. Keys are mapping ids
    /// and go over the wire as JSON object keys.
    pub async fn bulk_update_ai_access(
        &self,
        access: &BTreeMap<i64, bool>,
    ) -> Result<Value, ApiError> {
        self.put("metadata/mappings/ai-access/bulk", access).await
    }

    /// Resolves a mapping against live data, optionally for a specific
    /// ticket's customer. A ticket id of 0 is treated as absent.
    pub async fn test_mapping_value(
        &self,
        mapping_id: i64,
        ticket_id: Option<i64>,
    ) -> Result<Value, ApiError> {
        let path = format!("metadata/mappings/{mapping_id}/test-value");
        match ticket_id.filter(|&id| id != 0) {
            Some(id) => {
                self.get_with_query(&path, &[("ticketId", id.to_string())])
                    .await
            }
            None => self.get(&path).await,
        }
    }

    /// Lists template variables the mappings expose. An empty
    /// `exclude_variable` is treated as absent.
    pub async fn get_available_metadata_variables(
        &self,
        exclude_variable: Option<&str>,
    ) -> Result<Value, ApiError> {
        match exclude_variable.filter(|v| !v.is_empty()) {
            Some(name) => {
                self.get_with_query(
                    "metadata/variables/available",
                    &[("excludeVariable", name.to_string())],
                )
                .await
            }
            None => self.get("metadata/variables/available").await,
        }
    }
}

