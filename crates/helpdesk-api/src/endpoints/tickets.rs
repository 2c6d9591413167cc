use crate::client::HelpdeskClient;
use crate::error::ApiError;
use crate::models::{
    NewTicketMessage, Ticket, TicketMessage, TicketPriority, TicketStatus, TicketUpdate,
};

impl HelpdeskClient {
    pub async fn get_all_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get("tickets").await
    }

    pub async fn get_ticket_by_id(&self, id: i64) -> Result<Ticket, ApiError> {
        self.get(&format!("tickets/{id}")).await
    }

    pub async fn get_ticket_messages(&self, ticket_id: i64) -> Result<Vec<TicketMessage>, ApiError> {
        self.get(&format!("tickets/{ticket_id}/messages")).await
    }

    /// Appends a message to the ticket's conversation and returns the stored
    /// copy, with the id and timestamp the backend assigned.
    pub async fn add_ticket_message(
        &self,
        ticket_id: i64,
        message: &NewTicketMessage,
    ) -> Result<TicketMessage, ApiError> {
        self.post(&format!("tickets/{ticket_id}/messages"), message)
            .await
    }

    /// Sets the ticket status and, optionally, its priority.
    ///
    /// The backend copies both fields from the body, so omitting the
    /// priority leaves the decision of what to store to the server.
    pub async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
        priority: Option<TicketPriority>,
    ) -> Result<Ticket, ApiError> {
        let update = TicketUpdate { status, priority };
        self.put(&format!("tickets/{ticket_id}"), &update).await
    }
}
