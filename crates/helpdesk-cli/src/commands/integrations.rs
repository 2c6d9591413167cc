use anyhow::Result;
use colored::Colorize;
use helpdesk_api::HelpdeskClient;

use crate::cli::OutputFormat;
use crate::output::print_value;

pub async fn list(client: &HelpdeskClient, active: bool, format: OutputFormat) -> Result<()> {
    let integrations = if active {
        client.get_active_third_party_integrations().await?
    } else {
        client.get_all_third_party_integrations().await?
    };
    print_value(&integrations, format)
}

pub async fn get(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    print_value(&client.get_third_party_integration(id).await?, format)
}

pub async fn test(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    let result = client.test_third_party_connection(id).await?;
    let ok = result
        .get("success")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if ok {
        println!("{} Integration {id} connected", "✓".green());
    } else {
        println!("{} Integration {id} failed the connection test", "✗".red());
    }
    print_value(&result, format)
}

pub async fn items(
    client: &HelpdeskClient,
    id: i64,
    item_type: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    print_value(&client.fetch_third_party_items(id, item_type).await?, format)
}

pub async fn available(client: &HelpdeskClient, format: OutputFormat) -> Result<()> {
    print_value(&client.get_available_integrations().await?, format)
}
