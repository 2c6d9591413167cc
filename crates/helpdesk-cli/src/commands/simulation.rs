use anyhow::Result;
use colored::Colorize;
use helpdesk_api::{HelpdeskClient, ResultReview, SimulationRunRequest, TicketSelection};
use serde_json::Value;

use crate::cli::{OutputFormat, ReviewMark, SelectionArgs};
use crate::output::{print_success, print_value};

/// Explicit ids win; otherwise sample from the given categories.
fn selection(args: &SelectionArgs) -> TicketSelection {
    if args.tickets.is_empty() {
        TicketSelection::sample(args.categories.clone(), args.max)
    } else {
        TicketSelection::specific(args.tickets.clone())
    }
}

pub async fn candidates(
    client: &HelpdeskClient,
    args: &SelectionArgs,
    format: OutputFormat,
) -> Result<()> {
    let tickets = client.get_tickets_for_simulation(&selection(args)).await?;
    print_value(&Value::Array(tickets), format)
}

pub async fn run(
    client: &HelpdeskClient,
    args: &SelectionArgs,
    model: &str,
    format: OutputFormat,
) -> Result<()> {
    let request = SimulationRunRequest {
        selection: selection(args),
        model_name: model.to_string(),
    };
    let response = client.run_simulation(&request).await?;
    print_success(&format!(
        "Run {} simulated {} tickets with {}",
        response.run_id.cyan(),
        response.total_tickets,
        model
    ));
    print_value(&Value::Array(response.results), format)
}

pub async fn results(client: &HelpdeskClient, run_id: &str, format: OutputFormat) -> Result<()> {
    let results = client.get_simulation_results(run_id).await?;
    print_value(&Value::Array(results), format)
}

pub async fn review(
    client: &HelpdeskClient,
    result_id: i64,
    mark: Option<ReviewMark>,
    notes: Option<String>,
    ideal: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    anyhow::ensure!(
        mark.is_some() || notes.is_some() || ideal.is_some(),
        "Nothing to review: pass --mark, --notes or --ideal"
    );
    let review = ResultReview {
        human_mark: mark.map(Into::into),
        human_notes: notes,
        ideal_response: ideal,
    };
    let updated = client.update_simulation_result(result_id, &review).await?;
    print_success(&format!("Reviewed result {result_id}"));
    print_value(&updated, format)
}

pub async fn single(
    client: &HelpdeskClient,
    ticket_id: i64,
    model: &str,
    run_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let result = client
        .simulate_single_ticket(ticket_id, model, run_id)
        .await?;
    print_value(&result, format)
}
