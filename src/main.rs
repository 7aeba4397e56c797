use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use football::client::Client;
use football::data_provider::FootballDataProvider;
use football::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "football")]
#[command(
    about = "Football standings, fixtures and results",
    long_about = "Football standings, fixtures and results\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve deterministic fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a league table
    Table {
        /// Competition name or alias (e.g. epl, la-liga, ucl)
        competition: String,
    },
    /// Display upcoming games grouped by date
    Fixtures {
        /// Competition name or alias
        competition: String,

        /// Days ahead to include (defaults to window_days from the config)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Display finished games grouped by date
    Results {
        /// Competition name or alias
        competition: String,

        /// Days back to include (defaults to window_days from the config)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Display fixtures or results of the teams listed in favourite_teams
    Favourites {
        /// Show recent results instead of upcoming fixtures
        #[arg(short, long)]
        results: bool,

        /// Days to include (defaults to window_days from the config)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// List supported competitions
    Competitions,
    /// Display current configuration
    Config,
}

impl Cli {
    #[cfg(feature = "development")]
    fn use_mock(&self) -> bool {
        self.mock
    }

    #[cfg(not(feature = "development"))]
    fn use_mock(&self) -> bool {
        false
    }
}

fn create_client(config: &config::Config, mock: bool) -> Arc<dyn FootballDataProvider> {
    #[cfg(feature = "development")]
    if mock {
        return Arc::new(football::dev::mock_client::MockClient::new());
    }
    #[cfg(not(feature = "development"))]
    let _ = mock;

    match Client::from_config(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("timezone: {}", cfg.timezone);
    println!("request_timeout: {} seconds", cfg.request_timeout);
    println!("window_days: {}", cfg.window_days);
    println!("default_competition: {}", cfg.default_competition);
    println!("favourite_teams: {:?}", cfg.favourite_teams);
    println!();
    println!("[theme]");
    println!("selection_bg: {:?}", cfg.theme.selection_bg);
    println!("unfocused_selection_bg: {:?}", cfg.theme.unfocused_selection_bg);
    println!("border_fg: {:?}", cfg.theme.border_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
///
/// The API client is only built for commands that fetch.
async fn execute_command(config: &config::Config, mock: bool, command: Commands) -> anyhow::Result<()> {
    let window = |days: Option<u32>| days.unwrap_or(config.window_days);
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Competitions => {
            commands::competitions::run();
            Ok(())
        }
        Commands::Table { competition } => {
            let client = create_client(config, mock);
            commands::table::run(client.as_ref(), &competition).await
        }
        Commands::Fixtures { competition, days } => {
            let client = create_client(config, mock);
            commands::games::run_fixtures(client.as_ref(), &competition, window(days)).await
        }
        Commands::Results { competition, days } => {
            let client = create_client(config, mock);
            commands::games::run_results(client.as_ref(), &competition, window(days)).await
        }
        Commands::Favourites { results, days } => {
            let client = create_client(config, mock);
            commands::favourites::run(client.as_ref(), &config.favourite_teams, results, window(days)).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let mock = cli.use_mock();

    let Some(command) = cli.command else {
        let client = create_client(&config, mock);
        if let Err(e) = tui::run(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(&config, mock, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
