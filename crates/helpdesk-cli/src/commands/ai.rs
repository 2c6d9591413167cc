use anyhow::Result;
use colored::Colorize;
use helpdesk_api::{HelpdeskClient, Sentiment};

use crate::cli::OutputFormat;
use crate::output::{print_serialized, print_success};

pub async fn respond(
    client: &HelpdeskClient,
    ticket_id: i64,
    message: &str,
    add_to_ticket: bool,
    format: OutputFormat,
) -> Result<()> {
    let reply = client
        .generate_ai_response(ticket_id, message, add_to_ticket)
        .await?;
    if format == OutputFormat::Table {
        println!("{}", reply.response);
        if let Some(stored) = &reply.message {
            print_success(&format!("Stored as message {} on ticket #{ticket_id}", stored.id));
        }
        return Ok(());
    }
    print_serialized(&reply, format)
}

pub async fn sentiment(client: &HelpdeskClient, ticket_id: i64, format: OutputFormat) -> Result<()> {
    let sentiment = client.get_conversation_sentiment(ticket_id).await?;
    show_sentiment(&sentiment, format)
}

pub async fn analyze(client: &HelpdeskClient, text: &str, format: OutputFormat) -> Result<()> {
    let sentiment = client.analyze_message_sentiment(text).await?;
    show_sentiment(&sentiment, format)
}

pub async fn chat(
    client: &HelpdeskClient,
    message: &str,
    history: &str,
    format: OutputFormat,
) -> Result<()> {
    let reply = client.generate_chatbot_response(message, history).await?;
    if format == OutputFormat::Table {
        println!("{}", reply.response);
        return Ok(());
    }
    print_serialized(&reply, format)
}

fn show_sentiment(sentiment: &Sentiment, format: OutputFormat) -> Result<()> {
    if format != OutputFormat::Table {
        return print_serialized(sentiment, format);
    }
    let label = match sentiment.label.to_ascii_lowercase().as_str() {
        "positive" => sentiment.label.green(),
        "negative" => sentiment.label.red(),
        _ => sentiment.label.yellow(),
    };
    println!("{}: {label} ({:.2})", "Sentiment".cyan(), sentiment.score);
    Ok(())
}
