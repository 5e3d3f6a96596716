use cadence_core::error::CoreError;
use cadence_core::recurrence::RecurrenceEngine;
use cadence_core::repository::{EventRepository, JsonRepository};
use clap::Parser;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use util::resolve_event_id;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_env("CADENCE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    let config = config::Config::new().unwrap_or_else(|e| {
        eprintln!("{} {}; using defaults", "Warning:".yellow().bold(), e);
        config::Config::default()
    });
    debug!(?config, "loaded configuration");

    let engine = RecurrenceEngine::new(config.recurrence());
    let repository = match JsonRepository::open(&config.store_path, engine).await {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!(
                "{} Could not open '{}': {}",
                "Error:".red().bold(),
                config.store_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_event(&repository, command).await,
        cli::Commands::Expand(command) => {
            commands::expand::expand_event(command, &config.recurrence())
        }
        cli::Commands::List(command) => commands::list::list_events(&repository, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_event(&repository, command).await,
        cli::Commands::Delete(command) => {
            let event_id = match resolve_event_id(&repository, &command.id).await {
                Ok(id) => id,
                Err(e) => fail(e),
            };
            let event = match repository.find_event_by_id(event_id).await {
                Ok(Some(event)) => event,
                Ok(None) => fail(CoreError::NotFound(format!("Event with ID '{}' not found.", event_id)).into()),
                Err(e) => fail(e.into()),
            };

            if !command.force {
                let prompt = if command.series {
                    format!("Are you sure you want to delete every occurrence of '{}'?", event.draft.title)
                } else {
                    format!(
                        "Are you sure you want to delete '{}' on {}?",
                        event.draft.title, event.draft.date
                    )
                };
                let confirmation = Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirmation {
                    println!("Deletion cancelled.");
                    return;
                }
            }
            commands::delete::delete_event(&repository, event, command.series).await
        }
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn fail(err: anyhow::Error) -> ! {
    handle_error(err);
    std::process::exit(1);
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(events) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in events {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::OccurrenceLimitExceeded { limit } => {
                eprintln!(
                    "{} The series would exceed {} occurrences; set an earlier --until date",
                    "Error:".style(error_style),
                    limit.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
