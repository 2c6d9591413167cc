mod common;

use common::{message_json, setup, ticket_json, user_json};
use helpdesk_api::{NewTicketMessage, SenderType, TicketPriority, TicketStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn get_all_tickets_decodes_list() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([ticket_json(1, "OPEN"), ticket_json(2, "CLOSED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tickets = client.get_all_tickets().await.unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].status, TicketStatus::Open);
    assert_eq!(tickets[1].status, TicketStatus::Closed);
    assert_eq!(tickets[0].user.uid, "u-100");
}

#[tokio::test]
async fn get_ticket_by_id_and_messages() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(7, "PENDING")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/7/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([message_json(1, "USER"), message_json(2, "AGENT")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client.get_ticket_by_id(7).await.unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.status, TicketStatus::Pending);

    let messages = client.get_ticket_messages(7).await.unwrap();
    assert_eq!(messages[1].sender_type, SenderType::Agent);
}

#[tokio::test]
async fn add_ticket_message_posts_partial_message() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/tickets/7/messages"))
        .and(body_json(json!({
            "message": "We are looking into it.",
            "senderType": "AGENT",
            "senderName": "Sam"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json(11, "AGENT")))
        .expect(1)
        .mount(&server)
        .await;

    let msg = NewTicketMessage::new("We are looking into it.", SenderType::Agent)
        .with_sender_name("Sam");
    let stored = client.add_ticket_message(7, &msg).await.unwrap();
    assert_eq!(stored.id, 11);
}

#[tokio::test]
async fn update_ticket_status_sends_status_and_priority() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/tickets/3"))
        .and(body_json(json!({"status": "RESOLVED", "priority": "LOW"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(3, "RESOLVED")))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client
        .update_ticket_status(3, TicketStatus::Resolved, Some(TicketPriority::Low))
        .await
        .unwrap();
    assert_eq!(ticket.status, TicketStatus::Resolved);
}

#[tokio::test]
async fn update_ticket_status_without_priority_omits_field() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/tickets/3"))
        .and(body_json(json!({"status": "IN_PROGRESS"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(3, "IN_PROGRESS")))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_ticket_status(3, TicketStatus::InProgress, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_ticket_from_chat_forwards_body() {
    let (server, client) = setup().await;
    let request = json!({
        "userUid": "u-100",
        "subject": "Card declined",
        "conversation": "USER: my card was declined"
    });
    Mock::given(method("POST"))
        .and(path("/api/tickets/from-chat"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(99, "OPEN")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_ticket_from_chat(&request).await.unwrap();
    assert_eq!(created["id"], 99);
}

#[tokio::test]
async fn users_endpoints() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json("u-1")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u-1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/u-1/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(5, "OPEN")])))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.get_all_users().await.unwrap().len(), 1);
    assert_eq!(client.get_user_by_id("u-1").await.unwrap().location, "Lisbon");
    assert_eq!(client.get_user_tickets("u-1").await.unwrap()[0].id, 5);
}

#[tokio::test]
async fn user_id_is_encoded_as_one_segment() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/users/a%2Fb%20c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("a/b c")))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.get_user_by_id("a/b c").await.unwrap();
    assert_eq!(user.uid, "a/b c");
}

#[tokio::test]
async fn health_and_version() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/public/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "UP",
            "timestamp": "2024-03-02T10:00:00",
            "service": "prototype-backend"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/public/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "1.0.0",
            "java": "21.0.2",
            "spring-boot": "3.2.1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let health = client.check_health().await.unwrap();
    assert!(health.is_up());
    assert_eq!(health.service.as_deref(), Some("prototype-backend"));

    let version = client.get_version().await.unwrap();
    assert_eq!(version.version, "1.0.0");
    assert_eq!(version.spring_boot.as_deref(), Some("3.2.1"));
}
