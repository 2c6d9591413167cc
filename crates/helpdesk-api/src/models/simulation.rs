use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which tickets a simulation run should draw from.
///
/// `selection_mode` is passed through as given; the backend treats
/// `"specific"` as "use `ticket_ids`" and anything else as a filtered sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSelection {
    pub selection_mode: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ticket_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tickets: Option<u32>,
}

impl TicketSelection {
    /// Selects exactly the given tickets.
    #[must_use]
    pub fn specific(ticket_ids: Vec<i64>) -> Self {
        Self {
            selection_mode: "specific".to_string(),
            ticket_ids,
            ..Self::default()
        }
    }

    /// Selects up to `max_tickets` tickets from the given categories.
    #[must_use]
    pub fn sample(categories: Vec<String>, max_tickets: Option<u32>) -> Self {
        Self {
            selection_mode: "random".to_string(),
            categories,
            max_tickets,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRunRequest {
    #[serde(flatten)]
    pub selection: TicketSelection,
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRunResponse {
    pub run_id: String,
    pub total_tickets: u32,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Human verdict on an AI reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HumanMark {
    Correct,
    Incorrect,
}

/// Body of `PUT /simulation/results/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_mark: Option<HumanMark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_response: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SingleTicketSimulation<'a> {
    pub ticket_id: i64,
    pub model_name: &'a str,
    pub run_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_run_request_flattens_selection() {
        let req = SimulationRunRequest {
            selection: TicketSelection::sample(vec!["PAYMENTS".into()], Some(10)),
            model_name: "llama3".into(),
        };
        assert_json_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "selectionMode": "random",
                "categories": ["PAYMENTS"],
                "maxTickets": 10,
                "modelName": "llama3"
            })
        );
    }

    #[test]
    fn test_specific_selection() {
        let sel = TicketSelection::specific(vec![1, 2, 3]);
        assert_json_eq!(
            serde_json::to_value(&sel).unwrap(),
            json!({"selectionMode": "specific", "ticketIds": [1, 2, 3]})
        );
    }

    #[test]
    fn test_review_payload() {
        let review = ResultReview {
            human_mark: Some(HumanMark::Incorrect),
            human_notes: Some("Too vague".into()),
            ideal_response: None,
        };
        assert_json_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({"humanMark": "INCORRECT", "humanNotes": "Too vague"})
        );
    }

    #[test]
    fn test_run_response_decodes() {
        let resp: SimulationRunResponse = serde_json::from_value(json!({
            "runId": "4f0c",
            "totalTickets": 2,
            "results": [{"id": 1, "ticketId": 5}, {"id": 2, "ticketId": 6}]
        }))
        .unwrap();
        assert_eq!(resp.total_tickets, 2);
        assert_eq!(resp.results.len(), 2);
    }
}
