use anyhow::Result;
use helpdesk_api::HelpdeskClient;

use crate::cli::OutputFormat;
use crate::commands::{read_array, read_body};
use crate::output::{print_success, print_value};

pub async fn list(
    client: &HelpdeskClient,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let rules = match category {
        Some(category) => client.get_ai_rules_by_category(category).await?,
        None => client.get_all_ai_rules().await?,
    };
    print_value(&rules, format)
}

pub async fn get(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    print_value(&client.get_ai_rule(id).await?, format)
}

pub async fn create(
    client: &HelpdeskClient,
    file: &Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let body = read_body(file)?;
    let created = client.create_ai_rule(&body).await?;
    print_success("Created rule");
    print_value(&created, format)
}

pub async fn update(
    client: &HelpdeskClient,
    id: i64,
    file: &Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let body = read_body(file)?;
    let updated = client.update_ai_rule(id, &body).await?;
    print_success(&format!("Updated rule {id}"));
    print_value(&updated, format)
}

pub async fn delete(client: &HelpdeskClient, id: i64) -> Result<()> {
    client.delete_ai_rule(id).await?;
    print_success(&format!("Deleted rule {id}"));
    Ok(())
}

pub async fn reorder(client: &HelpdeskClient, file: &Option<String>) -> Result<()> {
    let rules = read_array(file)?;
    client.reorder_ai_rules(&rules).await?;
    print_success(&format!("Reordered {} rules", rules.len()));
    Ok(())
}
