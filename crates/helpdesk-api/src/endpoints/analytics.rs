use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct DashboardAnalysis<'a, W> {
    widgets: &'a [W],
}

#[derive(Serialize)]
struct DashboardQuery<'a, W> {
    widgets: &'a [W],
    query: &'a str,
}

impl HelpdeskClient {
    /// Runs an ad-hoc analytics query and returns the result rows.
    pub async fn execute_analytics_query<B: Serialize + ?Sized>(
        &self,
        query: &B,
    ) -> Result<Vec<Value>, ApiError> {
        self.post("analytics/query", query).await
    }

    pub async fn get_ticket_metrics(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/tickets").await
    }

    pub async fn get_user_metrics(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/users").await
    }

    pub async fn get_message_metrics(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/messages").await
    }

    pub async fn get_sentiment_metrics(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/sentiment").await
    }

    pub async fn get_location_distribution(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/distribution/location").await
    }

    pub async fn get_device_distribution(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/distribution/device").await
    }

    pub async fn get_status_distribution(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/distribution/status").await
    }

    pub async fn get_daily_trends(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/trends/daily").await
    }

    pub async fn get_advanced_metrics(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/advanced").await
    }

    pub async fn get_performance_metrics(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/metrics/performance").await
    }

    pub async fn get_hourly_activity(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/trends/hourly").await
    }

    pub async fn get_sentiment_trends(&self) -> Result<Vec<Value>, ApiError> {
        self.get("analytics/trends/sentiment").await
    }

    pub async fn get_average_resolution_time(&self) -> Result<Value, ApiError> {
        self.get("analytics/metrics/resolution-time").await
    }

    /// Asks the backend model to summarize the given dashboard widgets.
    pub async fn analyze_dashboard<W: Serialize>(&self, widgets: &[W]) -> Result<Value, ApiError> {
        self.post("analytics/dashboard/analyze", &DashboardAnalysis { widgets })
            .await
    }

    /// Asks a free-form question about the given dashboard widgets.
    pub async fn query_dashboard<W: Serialize>(
        &self,
        widgets: &[W],
        query: &str,
    ) -> Result<Value, ApiError> {
        self.post(
            "analytics/dashboard/query",
            &DashboardQuery { widgets, query },
        )
        .await
    }
}
