mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use common::{setup, ticket_json};
use helpdesk_api::{ApiError, ClientConfig, HelpdeskClient, Interceptor};
use reqwest::header::HeaderValue;
use reqwest::{Request, StatusCode};
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "Not Found",
            "message": "Ticket not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_ticket_by_id(404).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(err.to_string(), "HTTP 404 Not Found: Ticket not found");
}

#[tokio::test]
async fn unauthorized_is_surfaced_to_the_caller() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.get_all_tickets().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status_code(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn request_deadline_is_enforced() {
    let (server, _) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/public/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "UP"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::from_server(&server.uri(), "/api")
        .unwrap()
        .with_request_timeout(Duration::from_millis(100));
    let client = HelpdeskClient::new(config).unwrap();

    let err = client.check_health().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn json_headers_are_sent_by_default() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tickets = client.get_all_tickets().await.unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "one"})))
        .mount(&server)
        .await;

    let err = client.get_ticket_by_id(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status_code(), None);
}

#[derive(Default)]
struct Counter {
    requests: AtomicUsize,
    responses: AtomicUsize,
    errors: AtomicUsize,
}

struct Counting(Arc<Counter>);

impl Interceptor for Counting {
    fn on_request(&self, request: &mut Request) -> Result<(), ApiError> {
        self.0.requests.fetch_add(1, Ordering::SeqCst);
        request
            .headers_mut()
            .insert("x-trace", HeaderValue::from_static("test"));
        Ok(())
    }

    fn on_response(&self, _status: StatusCode, _url: &Url) {
        self.0.responses.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&self, _error: &ApiError) {
        self.0.errors.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn interceptors_observe_every_call() {
    let (server, client) = setup().await;
    let counter = Arc::new(Counter::default());
    let client = client.with_interceptor(Counting(counter.clone()));

    Mock::given(method("GET"))
        .and(path("/api/tickets/7"))
        .and(header("x-trace", "test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(7, "OPEN")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/8"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    client.get_ticket_by_id(7).await.unwrap();
    client.get_ticket_by_id(8).await.unwrap_err();

    assert_eq!(counter.requests.load(Ordering::SeqCst), 2);
    assert_eq!(counter.responses.load(Ordering::SeqCst), 2);
    assert_eq!(counter.errors.load(Ordering::SeqCst), 1);
}

struct Deny;

impl Interceptor for Deny {
    fn on_request(&self, _request: &mut Request) -> Result<(), ApiError> {
        Err(ApiError::rejected("offline mode"))
    }
}

#[tokio::test]
async fn rejecting_interceptor_stops_the_request() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.with_interceptor(Deny).get_all_tickets().await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref reason) if reason == "offline mode"));
}
