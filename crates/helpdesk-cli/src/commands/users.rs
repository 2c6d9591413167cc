use anyhow::Result;
use helpdesk_api::HelpdeskClient;

use crate::cli::OutputFormat;
use crate::output::{print_serialized, print_tickets};

pub async fn list(client: &HelpdeskClient, format: OutputFormat) -> Result<()> {
    let users = client.get_all_users().await?;
    print_serialized(&users, format)
}

pub async fn get(client: &HelpdeskClient, uid: &str, format: OutputFormat) -> Result<()> {
    let user = client.get_user_by_id(uid).await?;
    print_serialized(&user, format)
}

pub async fn tickets(client: &HelpdeskClient, uid: &str, format: OutputFormat) -> Result<()> {
    let tickets = client.get_user_tickets(uid).await?;
    print_tickets(&tickets, format)
}
