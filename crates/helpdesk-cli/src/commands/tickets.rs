use anyhow::Result;
use colored::Colorize;
use helpdesk_api::{HelpdeskClient, NewTicketMessage, TicketPriority, TicketStatus};

use crate::cli::{OutputFormat, ReplyArgs};
use crate::commands::read_body;
use crate::output::{print_messages, print_serialized, print_success, print_tickets, print_value};

pub async fn list(
    client: &HelpdeskClient,
    status: Option<TicketStatus>,
    format: OutputFormat,
) -> Result<()> {
    let mut tickets = client.get_all_tickets().await?;
    if let Some(status) = status {
        tickets.retain(|t| t.status == status);
    }
    print_tickets(&tickets, format)
}

pub async fn get(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    let ticket = client.get_ticket_by_id(id).await?;
    if format == OutputFormat::Table {
        println!("{} #{} {}", "Ticket".cyan(), ticket.id, ticket.subject.bold());
        println!(
            "{}: {}  {}: {}",
            "Status".cyan(),
            ticket.status,
            "Priority".cyan(),
            ticket.priority
        );
        println!(
            "{}: {} <{}>",
            "Customer".cyan(),
            ticket.user.name,
            ticket.user.email
        );
        if let Some(description) = &ticket.description {
            println!("\n{description}");
        }
        if let Some(messages) = &ticket.messages {
            println!();
            print_messages(messages, format)?;
        }
        return Ok(());
    }
    print_serialized(&ticket, format)
}

pub async fn messages(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    let messages = client.get_ticket_messages(id).await?;
    print_messages(&messages, format)
}

pub async fn reply(client: &HelpdeskClient, args: &ReplyArgs, format: OutputFormat) -> Result<()> {
    let mut message = NewTicketMessage::new(args.message.as_str(), args.sender);
    if let Some(name) = &args.name {
        message = message.with_sender_name(name.as_str());
    }
    let stored = client.add_ticket_message(args.id, &message).await?;
    print_success(&format!("Added message {} to ticket #{}", stored.id, args.id));
    if format != OutputFormat::Table {
        print_serialized(&stored, format)?;
    }
    Ok(())
}

pub async fn set_status(
    client: &HelpdeskClient,
    id: i64,
    status: TicketStatus,
    priority: Option<TicketPriority>,
    format: OutputFormat,
) -> Result<()> {
    let ticket = client.update_ticket_status(id, status, priority).await?;
    print_success(&format!(
        "Ticket #{} is now {} ({})",
        ticket.id,
        ticket.status.to_string().cyan(),
        ticket.priority
    ));
    if format != OutputFormat::Table {
        print_serialized(&ticket, format)?;
    }
    Ok(())
}

pub async fn from_chat(
    client: &HelpdeskClient,
    file: &Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let body = read_body(file)?;
    let created = client.create_ticket_from_chat(&body).await?;
    let id = created
        .get("id")
        .map(|v| v.to_string())
        .unwrap_or_else(|| "?".into());
    print_success(&format!("Created ticket #{id} from chat"));
    print_value(&created, format)
}
