use serde::{Deserialize, Serialize};

use super::TicketMessage;

/// Result of `POST /ai/tickets/{id}/generate-response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub response: String,
    /// The stored message, present only when the reply was added to the
    /// ticket.
    #[serde(default)]
    pub message: Option<TicketMessage>,
}

/// Sentiment score and label as computed by the backend model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotReply {
    pub response: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponseRequest<'a> {
    pub message: &'a str,
    pub add_to_ticket: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SentimentRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChatbotRequest<'a> {
    pub message: &'a str,
    pub conversation_history: &'a str,
}
