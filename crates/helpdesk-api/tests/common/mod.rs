#![allow(dead_code)]

use helpdesk_api::HelpdeskClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn setup() -> (MockServer, HelpdeskClient) {
    let server = MockServer::start().await;
    let client = HelpdeskClient::for_server(&server.uri()).expect("client");
    (server, client)
}

pub fn user_json(uid: &str) -> Value {
    json!({
        "uid": uid,
        "name": "Dana Reyes",
        "email": "dana@example.com",
        "location": "Lisbon",
        "device": "iOS",
        "phoneNumber": "+351 555 0101",
        "createdAt": "2024-03-01T09:15:00"
    })
}

pub fn ticket_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "subject": "Deposit not credited",
        "description": "Sent 200 EUR yesterday, balance unchanged",
        "status": status,
        "priority": "HIGH",
        "category": "DEPOSITS",
        "user": user_json("u-100"),
        "createdAt": "2024-03-02T10:00:00",
        "updatedAt": "2024-03-02T10:05:00"
    })
}

pub fn message_json(id: i64, sender_type: &str) -> Value {
    json!({
        "id": id,
        "message": "We are looking into it.",
        "senderType": sender_type,
        "senderName": "Sam",
        "createdAt": "2024-03-02T10:10:00"
    })
}
