use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

impl HelpdeskClient {
    /// Opens a ticket from a finished chatbot conversation.
    pub async fn create_ticket_from_chat<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<Value, ApiError> {
        self.post("tickets/from-chat", request).await
    }

    // --- Chatbot actions (interactive components the bot can offer) ---

    pub async fn get_all_chatbot_actions(&self) -> Result<Value, ApiError> {
        self.get("chatbot-actions").await
    }

    pub async fn get_active_chatbot_actions(&self) -> Result<Value, ApiError> {
        self.get("chatbot-actions/active").await
    }

    pub async fn get_chatbot_action(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("chatbot-actions/{id}")).await
    }

    pub async fn create_chatbot_action<B: Serialize + ?Sized>(
        &self,
        action: &B,
    ) -> Result<Value, ApiError> {
        self.post("chatbot-actions", action).await
    }

    pub async fn update_chatbot_action<B: Serialize + ?Sized>(
        &self,
        id: i64,
        action: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("chatbot-actions/{id}"), action).await
    }

    pub async fn delete_chatbot_action(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("chatbot-actions/{id}")).await
    }
}
