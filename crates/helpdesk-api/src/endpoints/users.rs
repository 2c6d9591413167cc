use crate::client::{HelpdeskClient, segment};
use crate::error::ApiError;
use crate::models::{Ticket, User};

impl HelpdeskClient {
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("users").await
    }

    pub async fn get_user_by_id(&self, uid: &str) -> Result<User, ApiError> {
        self.get(&format!("users/{}", segment(uid))).await
    }

    pub async fn get_user_tickets(&self, uid: &str) -> Result<Vec<Ticket>, ApiError> {
        self.get(&format!("users/{}/tickets", segment(uid))).await
    }
}
