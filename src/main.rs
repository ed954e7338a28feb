//! mindful - guided breathing and meditation timer for the terminal
//!
//! The timer runs in a small background daemon; every other subcommand is a
//! thin client that sends one request over a Unix socket and renders the
//! response.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use mindful::cli::{Cli, Commands, Display, IpcClient};
use mindful::daemon;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let socket = cli.socket.clone();

    match cli.command {
        Some(Commands::Breathe(args)) => {
            let response = make_client(&socket)?.breathe(&args).await?;
            Display::show_breathe_success(&response);
        }
        Some(Commands::Meditate(args)) => {
            let response = make_client(&socket)?.meditate(&args).await?;
            Display::show_meditate_success(&response);
        }
        Some(Commands::Technique { technique }) => {
            let response = make_client(&socket)?.technique(&technique).await?;
            Display::show_technique_success(&response);
        }
        Some(Commands::Duration { minutes }) => {
            let response = make_client(&socket)?.duration(minutes).await?;
            Display::show_duration_success(&response);
        }
        Some(Commands::Pause) => {
            let response = make_client(&socket)?.pause().await?;
            Display::show_pause_success(&response);
        }
        Some(Commands::Resume) => {
            let response = make_client(&socket)?.resume().await?;
            Display::show_resume_success(&response);
        }
        Some(Commands::Stop) => {
            let response = make_client(&socket)?.stop().await?;
            Display::show_stop_success(&response);
        }
        Some(Commands::Status) => {
            let response = make_client(&socket)?.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Techniques) => {
            Display::show_techniques();
        }
        Some(Commands::Daemon) => {
            let socket_path = match socket {
                Some(path) => path,
                None => daemon::default_socket_path()?,
            };
            daemon::run(&socket_path).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Builds an IPC client for the configured socket path.
fn make_client(socket: &Option<PathBuf>) -> Result<IpcClient> {
    match socket {
        Some(path) => Ok(IpcClient::with_socket_path(path.clone())),
        None => IpcClient::new(),
    }
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
