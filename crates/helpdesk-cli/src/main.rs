mod cli;
mod commands;
mod config;
mod logging;
mod output;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use helpdesk_api::config::DEFAULT_API_PREFIX;
use helpdesk_api::{ClientConfig, HelpdeskClient, Router};

use cli::{
    AiCommands, AnalyticsCommands, Cli, Commands, ConfigCommands, IntegrationCommands, KbCommands,
    OutputFormat, RouteCommands, RoutesArgs, RuleCommands, SimulationCommands, TicketCommands,
    UserCommands,
};
use config::ProfileConfig;
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // The route table is static: no profile, no config file, no backend.
    if let Commands::Routes(args) = &cli.command {
        return show_routes(args, cli.format.unwrap_or_default());
    }

    let config_path = config::config_path()?;
    let profile_name = &cli.profile;
    let profile = config::load_profile(&config_path, profile_name)?;
    let format = cli
        .format
        .or_else(|| profile.output_format())
        .unwrap_or_default();

    if let Commands::Config(args) = &cli.command {
        return configure(&args.command, &config_path, profile_name, profile);
    }

    let server = config::resolve_server(cli.server.as_deref(), &profile)?;
    let client = make_client(&server, &profile)?;
    tracing::debug!(profile = %profile_name, base_url = client.base_url(), "Using backend");

    match &cli.command {
        Commands::Status => commands::system::status(&client).await?,
        Commands::Version => commands::system::version(&client, format).await?,
        Commands::Tickets(args) => match &args.command {
            TicketCommands::List { status } => {
                commands::tickets::list(&client, *status, format).await?
            }
            TicketCommands::Get { id } => commands::tickets::get(&client, *id, format).await?,
            TicketCommands::Messages { id } => {
                commands::tickets::messages(&client, *id, format).await?
            }
            TicketCommands::Reply(reply) => {
                commands::tickets::reply(&client, reply, format).await?
            }
            TicketCommands::SetStatus {
                id,
                status,
                priority,
            } => commands::tickets::set_status(&client, *id, *status, *priority, format).await?,
            TicketCommands::FromChat { file } => {
                commands::tickets::from_chat(&client, file, format).await?
            }
        },
        Commands::Users(args) => match &args.command {
            UserCommands::List => commands::users::list(&client, format).await?,
            UserCommands::Get { uid } => commands::users::get(&client, uid, format).await?,
            UserCommands::Tickets { uid } => {
                commands::users::tickets(&client, uid, format).await?
            }
        },
        Commands::Ai(args) => match &args.command {
            AiCommands::Respond {
                ticket_id,
                message,
                add_to_ticket,
            } => {
                commands::ai::respond(&client, *ticket_id, message, *add_to_ticket, format)
                    .await?
            }
            AiCommands::Sentiment { ticket_id } => {
                commands::ai::sentiment(&client, *ticket_id, format).await?
            }
            AiCommands::Analyze { text } => commands::ai::analyze(&client, text, format).await?,
            AiCommands::Chat { message, history } => {
                commands::ai::chat(&client, message, history, format).await?
            }
        },
        Commands::Analytics(args) => match &args.command {
            AnalyticsCommands::Metrics { kind } => {
                commands::analytics::metrics(&client, *kind, format).await?
            }
            AnalyticsCommands::Distribution { kind } => {
                commands::analytics::distribution(&client, *kind, format).await?
            }
            AnalyticsCommands::Trends { kind } => {
                commands::analytics::trends(&client, *kind, format).await?
            }
            AnalyticsCommands::Query { file } => {
                commands::analytics::query(&client, file, format).await?
            }
            AnalyticsCommands::ResolutionTime => {
                commands::analytics::resolution_time(&client, format).await?
            }
        },
        Commands::Simulation(args) => match &args.command {
            SimulationCommands::Candidates(selection) => {
                commands::simulation::candidates(&client, selection, format).await?
            }
            SimulationCommands::Run { selection, model } => {
                commands::simulation::run(&client, selection, model, format).await?
            }
            SimulationCommands::Results { run_id } => {
                commands::simulation::results(&client, run_id, format).await?
            }
            SimulationCommands::Review {
                result_id,
                mark,
                notes,
                ideal,
            } => {
                commands::simulation::review(
                    &client,
                    *result_id,
                    *mark,
                    notes.clone(),
                    ideal.clone(),
                    format,
                )
                .await?
            }
            SimulationCommands::Single {
                ticket_id,
                model,
                run_id,
            } => commands::simulation::single(&client, *ticket_id, model, run_id, format).await?,
        },
        Commands::Rules(args) => match &args.command {
            RuleCommands::List { category } => {
                commands::rules::list(&client, category.as_deref(), format).await?
            }
            RuleCommands::Get { id } => commands::rules::get(&client, *id, format).await?,
            RuleCommands::Create { file } => commands::rules::create(&client, file, format).await?,
            RuleCommands::Update { id, file } => {
                commands::rules::update(&client, *id, file, format).await?
            }
            RuleCommands::Delete { id } => commands::rules::delete(&client, *id).await?,
            RuleCommands::Reorder { file } => commands::rules::reorder(&client, file).await?,
        },
        Commands::Kb(args) => match &args.command {
            KbCommands::Categories => commands::kb::categories(&client, format).await?,
            KbCommands::Articles { category, active } => {
                commands::kb::articles(&client, *category, *active, format).await?
            }
            KbCommands::Article { id } => commands::kb::article(&client, *id, format).await?,
            KbCommands::Search { query } => commands::kb::search(&client, query, format).await?,
        },
        Commands::Integrations(args) => match &args.command {
            IntegrationCommands::List { active } => {
                commands::integrations::list(&client, *active, format).await?
            }
            IntegrationCommands::Get { id } => {
                commands::integrations::get(&client, *id, format).await?
            }
            IntegrationCommands::Test { id } => {
                commands::integrations::test(&client, *id, format).await?
            }
            IntegrationCommands::Items { id, item_type } => {
                commands::integrations::items(&client, *id, item_type.as_deref(), format).await?
            }
            IntegrationCommands::Available => {
                commands::integrations::available(&client, format).await?
            }
        },
        // Answered above without a backend connection.
        Commands::Config(_) | Commands::Routes(_) => {}
    }

    Ok(())
}

fn show_routes(args: &RoutesArgs, format: OutputFormat) -> Result<()> {
    let router = Router::new(&args.base);
    match &args.command {
        RouteCommands::List => commands::routes::list(&router, format),
        RouteCommands::Resolve { location } => commands::routes::resolve(&router, location, format),
    }
}

fn configure(
    command: &ConfigCommands,
    path: &Path,
    profile_name: &str,
    mut profile: ProfileConfig,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("{}: {}", "Profile".cyan(), profile_name);
            println!("{}: {}", "File".cyan(), path.display());
            println!(
                "{}: {}",
                "Server".cyan(),
                profile.server.as_deref().unwrap_or("(not set)")
            );
            println!(
                "{}: {}",
                "API prefix".cyan(),
                profile.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX)
            );
            println!(
                "{}: {}",
                "Timeout".cyan(),
                profile
                    .timeout_secs
                    .map(|s| format!("{s}s"))
                    .unwrap_or_else(|| "30s (default)".into())
            );
            println!(
                "{}: {}",
                "Format".cyan(),
                profile.format.as_deref().unwrap_or("json")
            );
        }
        ConfigCommands::Set(set_args) => {
            profile.set(&set_args.key, &set_args.value)?;
            config::save_profile(path, profile_name, &profile)?;
            output::print_success(&format!("Set {} = {}", set_args.key, set_args.value));
        }
    }
    Ok(())
}

fn make_client(server: &str, profile: &ProfileConfig) -> Result<HelpdeskClient> {
    let prefix = profile.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX);
    let mut config = ClientConfig::from_server(server, prefix)
        .with_context(|| format!("Invalid server URL: {server}"))?;
    if let Some(timeout) = profile.timeout() {
        config = config.with_request_timeout(timeout);
    }
    HelpdeskClient::new(config).context("Failed to build HTTP client")
}
