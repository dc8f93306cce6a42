mod commands;
mod file_store;

use std::io;
use std::path::PathBuf;

use chatlog::{LogError, SendError, StoreError, SystemClock};
use clap::{Parser, Subcommand};
use time::UtcOffset;

use commands::SendAs;
use file_store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("message log: {0}")]
    Log(#[from] LogError),
    #[error("send rejected: {0}")]
    Send(#[from] SendError),
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("no quick response #{index}; choose 1-{count}")]
    UnknownQuickResponse { index: usize, count: usize },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "openmind-cli", about = "Read and write the Open Mind support chat log from a terminal")]
struct Cli {
    /// Directory holding `<key>.json` log files.
    #[arg(long, env = "OPENMIND_DIR", default_value = ".openmind")]
    dir: PathBuf,

    /// Log store activity to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the welcome message if the log is empty.
    Init,
    /// Print the log.
    Show {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Append a message as a student, or as a volunteer.
    Send {
        text: String,
        #[arg(long, default_value_t = false)]
        volunteer: bool,
        /// Go online before sending (volunteers only).
        #[arg(long, default_value_t = false, requires = "volunteer")]
        online: bool,
        /// Use a fixed alias instead of a random one.
        #[arg(long = "as")]
        alias: Option<String>,
    },
    /// List quick responses, or send one by number as an online volunteer.
    Quick {
        index: Option<usize>,
        #[arg(long = "as")]
        alias: Option<String>,
    },
    /// Delete the stored log.
    Clear,
    /// Check that an Open Mind server is serving.
    Ping {
        #[arg(long, env = "OPENMIND_BASE_URL", default_value = "http://127.0.0.1:3000")]
        base_url: String,
    },
}

fn main() -> Result<(), CliError> {
    // Must run before any other thread exists.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    let store = FileStore::new(cli.dir);
    let mut out = io::stdout().lock();
    let mut rng = rand::rng();

    match cli.command {
        Command::Init => commands::init(&store, &SystemClock, &mut out),
        Command::Show { json } => commands::show(&store, offset, json, &mut out),
        Command::Send { text, volunteer, online, alias } => {
            let who = SendAs { volunteer, online, alias };
            commands::send(&store, SystemClock, &text, who, &mut rng, &mut out)
        }
        Command::Quick { index, alias } => commands::quick(&store, SystemClock, index, alias, &mut rng, &mut out),
        Command::Clear => commands::clear(&store, &mut out),
        Command::Ping { base_url } => {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(run_ping(&base_url))
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}
