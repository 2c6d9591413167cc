//! Typed client for the helpdesk ticketing backend, plus the console's
//! route table.
//!
//! # Example
//!
//! ```no_run
//! use helpdesk_api::{HelpdeskClient, TicketStatus};
//!
//! # async fn run() -> Result<(), helpdesk_api::ApiError> {
//! let client = HelpdeskClient::for_server("http://localhost:8080")?;
//! for ticket in client.get_all_tickets().await? {
//!     if ticket.status == TicketStatus::Open {
//!         println!("#{} {}", ticket.id, ticket.subject);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The client and the router are independent: neither knows about the
//! other.

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod router;

pub use client::HelpdeskClient;
pub use config::ClientConfig;
pub use endpoints::DEFAULT_ITEM_TYPE;
pub use error::ApiError;
pub use interceptor::{Interceptor, PassThrough};
pub use models::*;
pub use router::{ResolvedRoute, RouteRecord, Router, View};
