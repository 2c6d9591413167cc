use anyhow::Result;
use helpdesk_api::HelpdeskClient;

use crate::cli::OutputFormat;
use crate::output::print_value;

pub async fn categories(client: &HelpdeskClient, format: OutputFormat) -> Result<()> {
    print_value(&client.get_all_categories().await?, format)
}

pub async fn articles(
    client: &HelpdeskClient,
    category: Option<i64>,
    active: bool,
    format: OutputFormat,
) -> Result<()> {
    let articles = match category {
        Some(id) => client.get_articles_by_category(id).await?,
        None if active => client.get_active_articles().await?,
        None => client.get_all_articles().await?,
    };
    print_value(&articles, format)
}

pub async fn article(client: &HelpdeskClient, id: i64, format: OutputFormat) -> Result<()> {
    print_value(&client.get_article_by_id(id).await?, format)
}

pub async fn search(client: &HelpdeskClient, query: &str, format: OutputFormat) -> Result<()> {
    print_value(&client.search_articles(query).await?, format)
}
