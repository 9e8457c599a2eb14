mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use code_journal_config::Config;
use code_journal_engine::{JsonFileStore, Journal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code-journal",
    author,
    version,
    about = "Keep a journal of coding notes and render them to HTML"
)]
struct Cli {
    /// Journal file to use instead of the one in the config file
    #[arg(long, global = true, value_name = "PATH")]
    journal: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markdown file (or stdin) to an HTML fragment
    Render {
        /// Markdown file; reads stdin when omitted or `-`
        file: Option<String>,
    },
    /// Write a config file pointing at the journal
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    #[command(flatten)]
    Journal(JournalCommand),
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// List entries as `id  date  title`
    List,
    /// Print one entry as HTML
    Show { id: String },
    /// Create an entry
    New {
        #[arg(long, default_value = "")]
        title: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        /// Markdown file for the body, or `-` for stdin
        #[arg(long, value_name = "FILE|-")]
        content: Option<String>,
    },
    /// Change an existing entry; omitted fields are kept
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        #[arg(long, value_name = "FILE|-")]
        content: Option<String>,
    },
    /// Delete an entry
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Render { file } => {
            let markdown = commands::read_source(file.as_deref())?;
            commands::render(&markdown, &mut stdout)
        }
        Command::Init { force } => {
            let mut config = Config::default();
            if let Some(journal_path) = cli.journal {
                config.journal_path = journal_path;
            }
            commands::init_config(&config, &Config::config_path(), force, &mut stdout)
        }
        Command::Journal(command) => {
            let config = load_config()?;
            let journal_path = cli.journal.unwrap_or(config.journal_path);
            log::debug!("using journal at {}", journal_path.display());

            let mut journal = Journal::new(JsonFileStore::new(journal_path));
            if config.seed_when_empty {
                journal.seed_if_empty(commands::today())?;
            }

            commands::execute(&mut journal, command, &mut stdout)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_config() -> Result<Config> {
    match Config::load().with_context(|| {
        format!(
            "Failed to load config file {}",
            Config::config_path().display()
        )
    })? {
        Some(config) => Ok(config),
        None => {
            log::info!(
                "no config file at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}
