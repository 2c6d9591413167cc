use clap::{Parser, Subcommand, ValueEnum};
use helpdesk_api::{HumanMark, SenderType, TicketPriority, TicketStatus};

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Helpdesk CLI: tickets, AI replies, analytics and admin for the support backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server origin (overrides config and HELPDESK_URL env var)
    #[arg(short, long, global = true, env = "HELPDESK_URL")]
    pub server: Option<String>,

    /// Config profile name
    #[arg(short, long, global = true, env = "HELPDESK_PROFILE", default_value = "default")]
    pub profile: String,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend health
    Status,
    /// Show backend version information
    Version,
    /// Work with support tickets
    Tickets(TicketsArgs),
    /// Look up customers
    Users(UsersArgs),
    /// AI replies and sentiment analysis
    Ai(AiArgs),
    /// Dashboard metrics and analytics queries
    Analytics(AnalyticsArgs),
    /// Replay tickets through a model and review the results
    Simulation(SimulationArgs),
    /// Manage AI rules
    Rules(RulesArgs),
    /// Browse the knowledge base
    Kb(KbArgs),
    /// Third-party integrations
    Integrations(IntegrationsArgs),
    /// Inspect the web console route table
    Routes(RoutesArgs),
    /// Manage CLI configuration
    Config(ConfigArgs),
}

// --- tickets ---

#[derive(clap::Args)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub command: TicketCommands,
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List tickets
    List {
        /// Only show tickets with this status (e.g. open, in-progress)
        #[arg(long)]
        status: Option<TicketStatus>,
    },
    /// Show a ticket
    Get { id: i64 },
    /// Show a ticket's conversation
    Messages { id: i64 },
    /// Post a message to a ticket
    Reply(ReplyArgs),
    /// Change a ticket's status and optionally its priority
    SetStatus {
        id: i64,
        status: TicketStatus,
        #[arg(long)]
        priority: Option<TicketPriority>,
    },
    /// Open a ticket from a chatbot conversation (JSON body)
    FromChat {
        /// Path to JSON file (reads from stdin if omitted)
        #[arg(long)]
        file: Option<String>,
    },
}

#[derive(clap::Args)]
pub struct ReplyArgs {
    pub id: i64,
    /// Message text
    pub message: String,
    /// Who is speaking
    #[arg(long, default_value = "agent")]
    pub sender: SenderType,
    /// Display name of the sender
    #[arg(long)]
    pub name: Option<String>,
}

// --- users ---

#[derive(clap::Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List customers
    List,
    /// Show a customer
    Get { uid: String },
    /// List a customer's tickets
    Tickets { uid: String },
}

// --- ai ---

#[derive(clap::Args)]
pub struct AiArgs {
    #[command(subcommand)]
    pub command: AiCommands,
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Generate a reply for a ticket
    Respond {
        ticket_id: i64,
        /// Customer message to answer
        message: String,
        /// Only print the reply; do not store it on the ticket
        #[arg(long = "no-store", action = clap::ArgAction::SetFalse)]
        add_to_ticket: bool,
    },
    /// Sentiment of a ticket's conversation
    Sentiment { ticket_id: i64 },
    /// Sentiment of a piece of text
    Analyze { text: String },
    /// Ask the chatbot
    Chat {
        message: String,
        /// Prior conversation as plain text
        #[arg(long, default_value = "")]
        history: String,
    },
}

// --- analytics ---

#[derive(clap::Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: AnalyticsCommands,
}

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Summary metrics
    Metrics {
        #[arg(value_enum, default_value = "tickets")]
        kind: MetricKind,
    },
    /// Breakdown of tickets by a dimension
    Distribution {
        #[arg(value_enum)]
        kind: DistributionKind,
    },
    /// Time series
    Trends {
        #[arg(value_enum, default_value = "daily")]
        kind: TrendKind,
    },
    /// Run an analytics query (JSON body)
    Query {
        /// Path to JSON file (reads from stdin if omitted)
        #[arg(long)]
        file: Option<String>,
    },
    /// Average ticket resolution time
    ResolutionTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricKind {
    Tickets,
    Users,
    Messages,
    Sentiment,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    Location,
    Device,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrendKind {
    Daily,
    Hourly,
    Sentiment,
    Performance,
}

// --- simulation ---

#[derive(clap::Args)]
pub struct SimulationArgs {
    #[command(subcommand)]
    pub command: SimulationCommands,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Simulate these tickets (comma separated ids)
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["categories", "max"])]
    pub tickets: Vec<i64>,
    /// Sample from these categories (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,
    /// Upper bound on sampled tickets
    #[arg(long)]
    pub max: Option<u32>,
}

#[derive(Subcommand)]
pub enum SimulationCommands {
    /// Preview the tickets a run would use
    Candidates(SelectionArgs),
    /// Run a simulation
    Run {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Model to simulate with
        #[arg(long)]
        model: String,
    },
    /// Show the results of a run
    Results { run_id: String },
    /// Review one simulated reply
    Review {
        result_id: i64,
        #[arg(long, value_enum)]
        mark: Option<ReviewMark>,
        #[arg(long)]
        notes: Option<String>,
        /// The reply the model should have given
        #[arg(long)]
        ideal: Option<String>,
    },
    /// Simulate a single ticket under an existing run
    Single {
        ticket_id: i64,
        #[arg(long)]
        model: String,
        #[arg(long)]
        run_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReviewMark {
    Correct,
    Incorrect,
}

impl From<ReviewMark> for HumanMark {
    fn from(mark: ReviewMark) -> Self {
        match mark {
            ReviewMark::Correct => HumanMark::Correct,
            ReviewMark::Incorrect => HumanMark::Incorrect,
        }
    }
}

// --- rules ---

#[derive(clap::Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RuleCommands,
}

#[derive(Subcommand)]
pub enum RuleCommands {
    /// List AI rules
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a rule
    Get { id: i64 },
    /// Create a rule (JSON body)
    Create {
        #[arg(long)]
        file: Option<String>,
    },
    /// Replace a rule (JSON body)
    Update {
        id: i64,
        #[arg(long)]
        file: Option<String>,
    },
    /// Delete a rule
    Delete { id: i64 },
    /// Reorder rules (JSON array in the new order)
    Reorder {
        #[arg(long)]
        file: Option<String>,
    },
}

// --- knowledge base ---

#[derive(clap::Args)]
pub struct KbArgs {
    #[command(subcommand)]
    pub command: KbCommands,
}

#[derive(Subcommand)]
pub enum KbCommands {
    /// List categories
    Categories,
    /// List articles
    Articles {
        /// Only articles in this category
        #[arg(long, conflicts_with = "active")]
        category: Option<i64>,
        /// Only published articles
        #[arg(long)]
        active: bool,
    },
    /// Show an article
    Article { id: i64 },
    /// Search article content
    Search { query: String },
}

// --- integrations ---

#[derive(clap::Args)]
pub struct IntegrationsArgs {
    #[command(subcommand)]
    pub command: IntegrationCommands,
}

#[derive(Subcommand)]
pub enum IntegrationCommands {
    /// List configured integrations
    List {
        #[arg(long)]
        active: bool,
    },
    /// Show an integration
    Get { id: i64 },
    /// Test an integration's connection
    Test { id: i64 },
    /// List items the integration can see
    Items {
        id: i64,
        /// Item type (defaults to PAGE)
        #[arg(long)]
        item_type: Option<String>,
    },
    /// Integration types the backend supports
    Available,
}

// --- routes ---

#[derive(clap::Args)]
pub struct RoutesArgs {
    /// History base the console is served under
    #[arg(long, default_value = "/")]
    pub base: String,

    #[command(subcommand)]
    pub command: RouteCommands,
}

#[derive(Subcommand)]
pub enum RouteCommands {
    /// Print the route table
    List,
    /// Resolve a location (path with optional ?query and #hash)
    Resolve { location: String },
}

// --- config ---

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set(ConfigSetArgs),
}

#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key to set (server, format, timeout_secs, api_prefix)
    pub key: String,
    /// Value
    pub value: String,
}
