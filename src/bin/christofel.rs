//! Command-line front end for the Christofel menu.
//!
//! Each invocation builds a fresh catalogue from the seed (flag, then
//! `CHRISTOFEL_SEED`, then the built-in menu), runs one command against it,
//! and prints the result. Nothing is written back; `apply` is the way to run
//! several edits against one catalogue.
//!
//! Logs go to stderr (filtered by `RUST_LOG`, default `warn`) so stdout can be
//! piped as JSON with `--json`.

use anyhow::{Context, Result};
use christofel::{
    CommandOutcome, Course, CourseSummary, DraftItem, DraftPrice, MenuCatalogue, MenuConfig,
    MenuItem, MenuItemId, Seed, apply_commands, format_amount, parse_command_stream,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{Read, stdin};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "christofel")]
#[command(about = "Browse and edit the Christofel menu catalogue")]
struct Cli {
    /// Seed file to start from (overrides CHRISTOFEL_SEED).
    #[arg(long, global = true)]
    seed: Option<PathBuf>,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the menu, optionally one course only.
    List {
        #[arg(long)]
        course: Option<Course>,
    },
    /// Item count and average price per course.
    Summary,
    /// Add a dish and print the resulting menu.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        course: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove a dish by id and print the resulting menu.
    Remove { id: String },
    /// Apply a stream of add/remove commands (JSON array, object or NDJSON).
    Apply {
        /// Read commands from a file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check a seed file without running anything else.
    ValidateSeed { path: PathBuf },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = MenuConfig::from_env().with_seed_path(cli.seed.clone());

    match cli.command {
        Command::List { course } => {
            let catalogue = config.build_catalogue()?;
            let items: Vec<&MenuItem> = match course {
                Some(course) => catalogue.list_by_course(course).collect(),
                None => catalogue.list_all().iter().collect(),
            };
            print_items(&items, cli.json)?;
        }
        Command::Summary => {
            let catalogue = config.build_catalogue()?;
            print_summary(&catalogue.summary(), cli.json)?;
        }
        Command::Add {
            name,
            course,
            price,
            description,
        } => {
            let mut catalogue = config.build_catalogue()?;
            let draft = DraftItem {
                name,
                category: course,
                price: DraftPrice::Text(price),
                description,
            };
            let id = catalogue.add(draft).context("menu item rejected")?;
            if !cli.json {
                println!("added {id}");
            }
            print_menu(&catalogue, cli.json)?;
        }
        Command::Remove { id } => {
            let mut catalogue = config.build_catalogue()?;
            let id = MenuItemId::from(id);
            let removed = catalogue.remove(&id);
            if !cli.json {
                match removed {
                    Some(item) => println!("removed {} ({})", item.id(), item.name()),
                    None => println!("no menu item with id {id}"),
                }
            }
            print_menu(&catalogue, cli.json)?;
        }
        Command::Apply { file } => {
            let mut catalogue = config.build_catalogue()?;
            let input = read_input(file)?;
            let commands = parse_command_stream(&input)?;
            let outcomes = apply_commands(&mut catalogue, commands);
            if cli.json {
                print_json(&ApplyReport {
                    outcomes: &outcomes,
                    items: catalogue.list_all(),
                })?;
            } else {
                for outcome in &outcomes {
                    println!("{}", describe(outcome));
                }
                print_menu(&catalogue, false)?;
            }
        }
        Command::ValidateSeed { path } => {
            let seed = Seed::load(&path)?;
            let report = SeedReport {
                path: path.display().to_string(),
                items: seed.len(),
            };
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}: {} items", report.path, report.items);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SeedReport {
    path: String,
    items: usize,
}

#[derive(Serialize)]
struct ApplyReport<'a> {
    outcomes: &'a [CommandOutcome],
    items: &'a [MenuItem],
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        buf = fs::read_to_string(&path)
            .with_context(|| format!("reading command file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading commands from stdin")?;
    }
    Ok(buf)
}

fn describe(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Added { id } => format!("added {id}"),
        CommandOutcome::Rejected { reason } => format!("rejected: {reason}"),
        CommandOutcome::Removed { id } => format!("removed {id}"),
        CommandOutcome::NotFound { id } => format!("not found: {id}"),
    }
}

fn print_menu(catalogue: &MenuCatalogue, json: bool) -> Result<()> {
    let items: Vec<&MenuItem> = catalogue.list_all().iter().collect();
    print_items(&items, json)
}

fn print_items(items: &[&MenuItem], json: bool) -> Result<()> {
    if json {
        return print_json(&items);
    }
    for item in items {
        println!(
            "{:<8} {:<13} {:>9}  {}",
            item.id(),
            item.course(),
            item.price(),
            item.name()
        );
    }
    Ok(())
}

fn print_summary(summary: &[CourseSummary], json: bool) -> Result<()> {
    if json {
        return print_json(&summary);
    }
    for entry in summary {
        println!(
            "{:<13} {:>3} items  average {}",
            entry.course,
            entry.items,
            format_amount(entry.average_price)
        );
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
