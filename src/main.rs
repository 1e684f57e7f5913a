mod api;
mod consts;
mod environment;
mod events;
mod logging;
mod models;
mod session;
mod ui;

use crate::logging::LogSink;
use crate::session::{HeadlessCommand, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the pipeline backend API [default: http://localhost:8000/api]
    #[arg(long, global = true, env = "PIPELINE_BACKEND_URL", value_name = "URL")]
    backend_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive admin dashboard
    Dashboard {
        /// Paint a dark background behind the dashboard.
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print the monitored tickers
    Watchlist {
        /// Admin password sent as the x-admin-password header
        #[arg(long, env = "PIPELINE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the pipeline job history
    Jobs {
        /// Admin password sent as the x-admin-password header
        #[arg(long, env = "PIPELINE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Trigger a pipeline run, then print the job history
    Run {
        /// Admin password sent as the x-admin-password header
        #[arg(long, env = "PIPELINE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let session = setup_session(args.backend_url.as_deref())?;

    let (headless, password) = match args.command {
        Command::Dashboard { with_background } => {
            let log_file = logging::default_log_file()?;
            logging::init(LogSink::File(log_file.clone()))?;
            return run_tui_mode(session, with_background, &log_file).await;
        }
        Command::Watchlist { password } => (HeadlessCommand::Watchlist, password),
        Command::Jobs { password } => (HeadlessCommand::Jobs, password),
        Command::Run { password } => (HeadlessCommand::Run, password),
    };

    logging::init(LogSink::Stderr)?;
    let client = session.client(Some(password));
    let mut stdout = std::io::stdout();
    run_headless_mode(headless, &client, &mut stdout).await
}
