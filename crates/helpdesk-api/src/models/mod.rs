//! Request and response shapes.
//!
//! These are transit types: they mirror the JSON the backend produces and
//! accepts, with camelCase field names and upper-case enum values. Payloads
//! the backend leaves loosely typed are carried as `serde_json::Value`.

mod ai;
mod simulation;
mod system;
mod ticket;

pub use ai::{AiResponse, ChatbotReply, Sentiment};
pub(crate) use ai::{ChatbotRequest, GenerateResponseRequest, SentimentRequest};
pub use simulation::{
    HumanMark, ResultReview, SimulationRunRequest, SimulationRunResponse, TicketSelection,
};
pub(crate) use simulation::SingleTicketSimulation;
pub use system::{HealthStatus, VersionInfo};
pub use ticket::{
    NewTicketMessage, SenderType, Ticket, TicketCategory, TicketMessage, TicketPriority,
    TicketStatus, TicketUpdate, User,
};
