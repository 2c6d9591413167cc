use serde::Serialize;
use serde_json::Value;

use crate::client::{HelpdeskClient, segment};
use crate::error::ApiError;
use crate::models::{
    AiResponse, ChatbotReply, ChatbotRequest, GenerateResponseRequest, Sentiment,
    SentimentRequest,
};

impl HelpdeskClient {
    /// Asks the model for a reply to `message` in the context of a ticket.
    ///
    /// With `add_to_ticket` the backend also stores the reply as a ticket
    /// message and returns it alongside the text.
    pub async fn generate_ai_response(
        &self,
        ticket_id: i64,
        message: &str,
        add_to_ticket: bool,
    ) -> Result<AiResponse, ApiError> {
        let body = GenerateResponseRequest {
            message,
            add_to_ticket,
        };
        self.post(&format!("ai/tickets/{ticket_id}/generate-response"), &body)
            .await
    }

    pub async fn get_conversation_sentiment(&self, ticket_id: i64) -> Result<Sentiment, ApiError> {
        self.get(&format!("ai/tickets/{ticket_id}/sentiment")).await
    }

    pub async fn analyze_message_sentiment(&self, text: &str) -> Result<Sentiment, ApiError> {
        self.post("ai/sentiment", &SentimentRequest { text }).await
    }

    pub async fn generate_chatbot_response(
        &self,
        message: &str,
        conversation_history: &str,
    ) -> Result<ChatbotReply, ApiError> {
        let body = ChatbotRequest {
            message,
            conversation_history,
        };
        self.post("ai/chatbot/response", &body).await
    }

    // --- Rules ---

    pub async fn get_all_ai_rules(&self) -> Result<Value, ApiError> {
        self.get("ai/rules").await
    }

    pub async fn get_ai_rules_by_category(&self, category: &str) -> Result<Value, ApiError> {
        self.get(&format!("ai/rules/category/{}", segment(category)))
            .await
    }

    pub async fn get_ai_rule(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("ai/rules/{id}")).await
    }

    pub async fn create_ai_rule<B: Serialize + ?Sized>(&self, rule: &B) -> Result<Value, ApiError> {
        self.post("ai/rules", rule).await
    }

    pub async fn update_ai_rule<B: Serialize + ?Sized>(
        &self,
        id: i64,
        rule: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("ai/rules/{id}"), rule).await
    }

    pub async fn delete_ai_rule(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("ai/rules/{id}")).await
    }

    /// Sends the full rule list in its new order; the backend assigns
    /// priorities from list position.
    pub async fn reorder_ai_rules<B: Serialize>(&self, rules: &[B]) -> Result<Value, ApiError> {
        self.post("ai/rules/reorder", rules).await
    }
}
