use anyhow::Result;
use colored::Colorize;
use helpdesk_api::{ResolvedRoute, Router};
use serde_json::{Value, json};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;
use crate::output::print_value;

pub fn list(router: &Router, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        let mut builder = Builder::default();
        builder.push_record(["Name", "Path", "Href", "Loading"]);
        for route in router.routes() {
            builder.push_record([
                route.name.to_string(),
                route.path.to_string(),
                router.href(route.name).unwrap_or_default(),
                if route.component.is_lazy() { "lazy" } else { "eager" }.to_string(),
            ]);
        }
        println!("{}", builder.build().with(Style::rounded()));
        return Ok(());
    }
    let rows: Vec<Value> = router
        .routes()
        .iter()
        .map(|route| {
            json!({
                "name": route.name,
                "path": route.path,
                "href": router.href(route.name),
                "lazy": route.component.is_lazy(),
            })
        })
        .collect();
    print_value(&Value::Array(rows), format)
}

pub fn resolve(router: &Router, location: &str, format: OutputFormat) -> Result<()> {
    let Some(route) = router.resolve(location) else {
        anyhow::bail!("No route matches {location}");
    };
    if format == OutputFormat::Table {
        println!(
            "{} {} {} {}",
            "✓".green(),
            location.cyan(),
            "→".dimmed(),
            route.view.title().bold()
        );
        println!("  {}: {}", "Route".cyan(), route.name);
        for (key, value) in &route.query {
            println!("  {}: {key}={value}", "Query".cyan());
        }
        if let Some(hash) = &route.hash {
            println!("  {}: #{hash}", "Hash".cyan());
        }
        return Ok(());
    }
    print_value(&describe(&route), format)
}

fn describe(route: &ResolvedRoute) -> Value {
    let query: serde_json::Map<String, Value> = route
        .query
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    json!({
        "name": route.name,
        "path": route.path,
        "fullPath": route.full_path,
        "query": query,
        "hash": route.hash,
        "view": route.view.title(),
    })
}
