mod commands;
mod config;
mod gist;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gistsched_core::CoreError;
use owo_colors::OwoColorize;

use commands::{Connection, FieldArgs, parse_date};

#[derive(Parser)]
#[command(name = "gistsched")]
#[command(about = "Edit one dated event in a JSON schedule file stored in a GitHub Gist")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/gistsched/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gist holding the schedule file
    #[arg(long, global = true, env = "GISTSCHED_GIST_ID")]
    gist_id: Option<String>,

    /// File inside the gist (e.g. "schedule.json")
    #[arg(long, global = true, env = "GISTSCHED_FILENAME")]
    filename: Option<String>,

    /// GitHub token with gist scope. Only sent as a request header, never stored.
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the event stored for a date
    Show {
        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List every event in the schedule file
    List,
    /// Create or update the event for a date
    Set {
        /// Date to edit (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Start from blank fields instead of the stored event
        #[arg(long)]
        clear: bool,

        /// Print the document that would be saved instead of saving it
        #[arg(long)]
        dry_run: bool,

        /// Skip loading and write a new file holding only this event
        /// (replaces the file if the gist already has one)
        #[arg(long = "new")]
        new_file: bool,
    },
    /// Edit an event interactively
    Edit {
        /// Date to start on (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Skip loading and start a new schedule file
        #[arg(long = "new")]
        new_file: bool,
    },
    /// Print the record the given fields would produce, without loading or saving
    Preview {
        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Editor failures have already been shown as a status line.
        Err(e) if e.is::<CoreError>() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    let conn = Connection::resolve(&cfg, cli.gist_id, cli.filename, cli.token);

    match cli.command {
        Commands::Show { date } => commands::show::run(&conn, date.unwrap_or_else(commands::today)).await,
        Commands::List => commands::list::run(&conn).await,
        Commands::Set {
            date,
            fields,
            clear,
            dry_run,
            new_file,
        } => {
            let date = date.unwrap_or_else(commands::today);
            commands::set::run(&conn, date, &fields, clear, dry_run, new_file).await
        }
        Commands::Edit { date, new_file } => {
            commands::edit::run(&conn, date.unwrap_or_else(commands::today), new_file).await
        }
        Commands::Preview { date, fields } => commands::preview::run(date.unwrap_or_else(commands::today), &fields),
    }
}
