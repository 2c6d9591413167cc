use serde_json::Value;

use crate::client::{HelpdeskClient, segment};
use crate::error::ApiError;
use crate::models::{
    ResultReview, SimulationRunRequest, SimulationRunResponse, SingleTicketSimulation,
    TicketSelection,
};

impl HelpdeskClient {
    /// Previews which tickets a run with this selection would use.
    pub async fn get_tickets_for_simulation(
        &self,
        selection: &TicketSelection,
    ) -> Result<Vec<Value>, ApiError> {
        self.post("simulation/tickets", selection).await
    }

    /// Runs the model over every selected ticket in one request.
    pub async fn run_simulation(
        &self,
        request: &SimulationRunRequest,
    ) -> Result<SimulationRunResponse, ApiError> {
        self.post("simulation/run", request).await
    }

    pub async fn get_simulation_results(&self, run_id: &str) -> Result<Vec<Value>, ApiError> {
        self.get(&format!("simulation/results/{}", segment(run_id)))
            .await
    }

    /// Records a human review of one simulated reply.
    pub async fn update_simulation_result(
        &self,
        result_id: i64,
        review: &ResultReview,
    ) -> Result<Value, ApiError> {
        self.put(&format!("simulation/results/{result_id}"), review)
            .await
    }

    /// Simulates one ticket and files the result under `run_id`. Lets a
    /// caller drive a run ticket by ticket and report progress.
    pub async fn simulate_single_ticket(
        &self,
        ticket_id: i64,
        model_name: &str,
        run_id: &str,
    ) -> Result<Value, ApiError> {
        let body = SingleTicketSimulation {
            ticket_id,
            model_name,
            run_id,
        };
        self.post("simulation/simulate-ticket", &body).await
    }
}
