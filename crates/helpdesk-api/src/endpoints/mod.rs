//! Endpoint methods on [`HelpdeskClient`](crate::HelpdeskClient), one
//! module per backend area.

mod ai;
mod ai_config;
mod analytics;
mod chatbot;
mod customer_profile;
mod health;
mod integrations;
mod knowledge_base;
mod metadata;
mod simulation;
mod ticket_fields;
mod tickets;
mod users;

pub use integrations::DEFAULT_ITEM_TYPE;
