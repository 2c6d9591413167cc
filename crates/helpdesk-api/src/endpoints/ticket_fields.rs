use serde::Serialize;
use serde_json::Value;

use crate::client::{HelpdeskClient, segment};
use crate::error::ApiError;

impl HelpdeskClient {
    pub async fn get_active_ticket_fields(&self) -> Result<Value, ApiError> {
        self.get("ticket-fields/fields").await
    }

    pub async fn get_all_ticket_fields(&self) -> Result<Value, ApiError> {
        self.get("ticket-fields/fields/all").await
    }

    /// Fields shown at a given place in the ticket view.
    pub async fn get_ticket_fields_by_location(&self, location: &str) -> Result<Value, ApiError> {
        self.get(&format!("ticket-fields/fields/location/{}", segment(location)))
            .await
    }

    pub async fn get_ticket_field_data(
        &self,
        ticket_id: i64,
        location: &str,
    ) -> Result<Value, ApiError> {
        self.get(&format!(
            "ticket-fields/data/{ticket_id}/{}",
            segment(location)
        ))
        .await
    }

    pub async fn create_ticket_field<B: Serialize + ?Sized>(&self, field: &B) -> Result<Value, ApiError> {
        self.post("ticket-fields/fields", field).await
    }

    pub async fn update_ticket_field<B: Serialize + ?Sized>(
        &self,
        id: i64,
        field: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("ticket-fields/fields/{id}"), field).await
    }

    pub async fn delete_ticket_field(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("ticket-fields/fields/{id}")).await
    }
}
