use anyhow::Result;
use helpdesk_api::HelpdeskClient;
use serde_json::Value;

use crate::cli::{DistributionKind, MetricKind, OutputFormat, TrendKind};
use crate::commands::read_body;
use crate::output::print_value;

pub async fn metrics(client: &HelpdeskClient, kind: MetricKind, format: OutputFormat) -> Result<()> {
    let value = match kind {
        MetricKind::Tickets => client.get_ticket_metrics().await?,
        MetricKind::Users => client.get_user_metrics().await?,
        MetricKind::Messages => client.get_message_metrics().await?,
        MetricKind::Sentiment => client.get_sentiment_metrics().await?,
        MetricKind::Advanced => client.get_advanced_metrics().await?,
    };
    print_value(&value, format)
}

pub async fn distribution(
    client: &HelpdeskClient,
    kind: DistributionKind,
    format: OutputFormat,
) -> Result<()> {
    let rows = match kind {
        DistributionKind::Location => client.get_location_distribution().await?,
        DistributionKind::Device => client.get_device_distribution().await?,
        DistributionKind::Status => client.get_status_distribution().await?,
    };
    print_value(&Value::Array(rows), format)
}

pub async fn trends(client: &HelpdeskClient, kind: TrendKind, format: OutputFormat) -> Result<()> {
    let rows = match kind {
        TrendKind::Daily => client.get_daily_trends().await?,
        TrendKind::Hourly => client.get_hourly_activity().await?,
        TrendKind::Sentiment => client.get_sentiment_trends().await?,
        TrendKind::Performance => client.get_performance_metrics().await?,
    };
    print_value(&Value::Array(rows), format)
}

pub async fn query(
    client: &HelpdeskClient,
    file: &Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let body = read_body(file)?;
    let rows = client.execute_analytics_query(&body).await?;
    print_value(&Value::Array(rows), format)
}

pub async fn resolution_time(client: &HelpdeskClient, format: OutputFormat) -> Result<()> {
    let value = client.get_average_resolution_time().await?;
    print_value(&value, format)
}
