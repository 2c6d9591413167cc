use anyhow::Result;
use colored::Colorize;
use helpdesk_api::HelpdeskClient;

use crate::cli::OutputFormat;
use crate::output::print_serialized;

pub async fn status(client: &HelpdeskClient) -> Result<()> {
    let server = client.base_url();
    match client.check_health().await {
        Ok(health) if health.is_up() => {
            println!("{} {} is {}", "✓".green(), server.cyan(), "healthy".green());
            if let Some(service) = &health.service {
                println!("  {}: {service}", "Service".cyan());
            }
        }
        Ok(health) => {
            println!(
                "{} {} reports {}",
                "✗".red(),
                server.cyan(),
                health.status.red()
            );
        }
        Err(e) => {
            println!("{} {} is {}", "✗".red(), server.cyan(), "unreachable".red());
            return Err(e.into());
        }
    }
    Ok(())
}

pub async fn version(client: &HelpdeskClient, format: OutputFormat) -> Result<()> {
    let info = client.get_version().await?;
    if format == OutputFormat::Table {
        println!("{}: {}", "Version".cyan(), info.version);
        if let Some(java) = &info.java {
            println!("{}: {java}", "Java".cyan());
        }
        if let Some(spring) = &info.spring_boot {
            println!("{}: {spring}", "Spring Boot".cyan());
        }
        return Ok(());
    }
    print_serialized(&info, format)
}
