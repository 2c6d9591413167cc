use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

impl HelpdeskClient {
    /// Active profile fields only.
    pub async fn get_customer_profile_fields(&self) -> Result<Value, ApiError> {
        self.get("customer-profile/fields").await
    }

    pub async fn get_all_customer_profile_fields(&self) -> Result<Value, ApiError> {
        self.get("customer-profile/fields/all").await
    }

    /// Profile values for the customer behind a ticket, resolved through the
    /// configured metadata mappings.
    pub async fn get_customer_profile_data(&self, ticket_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("customer-profile/data/{ticket_id}")).await
    }

    pub async fn create_customer_profile_field<B: Serialize + ?Sized>(
        &self,
        field: &B,
    ) -> Result<Value, ApiError> {
        self.post("customer-profile/fields", field).await
    }

    pub async fn update_customer_profile_field<B: Serialize + ?Sized>(
        &self,
        id: i64,
        field: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("customer-profile/fields/{id}"), field).await
    }

    pub async fn delete_customer_profile_field(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("customer-profile/fields/{id}")).await
    }
}
