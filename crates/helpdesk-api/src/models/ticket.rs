use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Customer identity as exposed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub device: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Origin of a ticket message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderType {
    /// The customer who opened the ticket.
    User,
    /// A human support agent.
    Agent,
    /// Automated system output.
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: i64,
    pub message: String,
    pub sender_type: SenderType,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for posting a message to a ticket. The backend fills in the id and
/// timestamp, so only the content fields are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketMessage {
    pub message: String,
    pub sender_type: SenderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

impl NewTicketMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, sender_type: SenderType) -> Self {
        Self {
            message: message.into(),
            sender_type,
            sender_name: None,
        }
    }

    #[must_use]
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Deposits,
    Withdrawals,
    Account,
    Verification,
    Payments,
    Technical,
    General,
}

/// A customer support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TicketCategory>,
    pub user: User,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<TicketMessage>>,
}

/// Body of `PUT /tickets/{id}`. A missing priority is left out of the
/// payload entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
}

// Wire names double as the CLI spelling, so Display/FromStr use them too.

macro_rules! wire_enum_text {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The wire representation of this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
                match normalized.as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(format!(
                        "invalid {}: {s:?} (expected one of: {})",
                        stringify!($ty),
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

wire_enum_text!(SenderType {
    User => "USER",
    Agent => "AGENT",
    System => "SYSTEM",
});

wire_enum_text!(TicketStatus {
    Open => "OPEN",
    InProgress => "IN_PROGRESS",
    Pending => "PENDING",
    Resolved => "RESOLVED",
    Closed => "CLOSED",
});

wire_enum_text!(TicketPriority {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Urgent => "URGENT",
});

wire_enum_text!(TicketCategory {
    Deposits => "DEPOSITS",
    Withdrawals => "WITHDRAWALS",
    Account => "ACCOUNT",
    Verification => "VERIFICATION",
    Payments => "PAYMENTS",
    Technical => "TECHNICAL",
    General => "GENERAL",
});

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_ticket_deserializes_backend_payload() {
        let payload = json!({
            "id": 42,
            "subject": "Withdrawal stuck",
            "description": "My withdrawal has been pending for 3 days",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "category": "WITHDRAWALS",
            "user": {
                "uid": "u-100",
                "name": "Dana Reyes",
                "email": "dana@example.com",
                "location": "Lisbon",
                "device": "iOS",
                "phoneNumber": "+351 555 0101",
                "createdAt": "2024-03-01T09:15:00"
            },
            "createdAt": "2024-03-02T10:00:00",
            "updatedAt": "2024-03-02T11:30:00.123456",
            "messages": [{
                "id": 7,
                "message": "Any update?",
                "senderType": "USER",
                "senderName": "Dana Reyes",
                "createdAt": "2024-03-02T11:30:00"
            }]
        });

        let ticket: Ticket = serde_json::from_value(payload).unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.priority, TicketPriority::High);
        assert_eq!(ticket.category, Some(TicketCategory::Withdrawals));
        assert_eq!(ticket.user.phone_number.as_deref(), Some("+351 555 0101"));
        let messages = ticket.messages.as_ref().unwrap();
        assert_eq!(messages[0].sender_type, SenderType::User);
    }

    #[test]
    fn test_ticket_without_optional_fields() {
        let payload = json!({
            "id": 1,
            "subject": "Hello",
            "status": "OPEN",
            "priority": "MEDIUM",
            "category": null,
            "user": {
                "uid": "u-1",
                "name": "Lee",
                "email": "lee@example.com",
                "location": "Oslo",
                "device": "Android"
            }
        });
        let ticket: Ticket = serde_json::from_value(payload).unwrap();
        assert_eq!(ticket.category, None);
        assert_eq!(ticket.messages, None);
        assert_eq!(ticket.user.phone_number, None);
        assert_eq!(ticket.description, None);
    }

    #[test]
    fn test_ticket_update_omits_missing_priority() {
        let update = TicketUpdate {
            status: TicketStatus::Resolved,
            priority: None,
        };
        assert_json_eq!(serde_json::to_value(update).unwrap(), json!({"status": "RESOLVED"}));

        let update = TicketUpdate {
            status: TicketStatus::Pending,
            priority: Some(TicketPriority::Urgent),
        };
        assert_json_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"status": "PENDING", "priority": "URGENT"})
        );
    }

    #[test]
    fn test_new_message_payload() {
        let msg = NewTicketMessage::new("On it", SenderType::Agent).with_sender_name("Sam");
        assert_json_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"message": "On it", "senderType": "AGENT", "senderName": "Sam"})
        );
    }

    #[test]
    fn test_enum_text_parsing() {
        assert_eq!("in-progress".parse::<TicketStatus>(), Ok(TicketStatus::InProgress));
        assert_eq!(" closed ".parse::<TicketStatus>(), Ok(TicketStatus::Closed));
        assert_eq!("Urgent".parse::<TicketPriority>(), Ok(TicketPriority::Urgent));
        assert_eq!("system".parse::<SenderType>(), Ok(SenderType::System));
        assert!("someday".parse::<TicketStatus>().is_err());
        assert_eq!(TicketCategory::Payments.to_string(), "PAYMENTS");
        assert_eq!(TicketStatus::ALL.len(), 5);
    }

    #[test]
    fn test_display_matches_wire_format() {
        for status in TicketStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, json!(status.as_str()));
        }
        for category in TicketCategory::ALL {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, json!(category.as_str()));
        }
    }
}
