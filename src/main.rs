//! diffscribe - CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diffscribe::{Config, GeminiClient, Outcome, SystemGit, run};

/// Environment variable holding the tracing filter.
const LOG_ENV_VAR: &str = "DIFFSCRIBE_LOG";

/// Generate a commit message for the staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "diffscribe")]
#[command(about = "Generate a commit message for the staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Step 1: Credentials, before touching git or the network
    let mut config = Config::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    // Step 2: Staged diff → Gemini → validated message
    let git = SystemGit::new();
    let client = GeminiClient::new(config);

    match run(&git, &client).await? {
        Outcome::Message(message) => println!("{message}"),
        Outcome::NothingStaged => {
            eprintln!("No staged changes found.");
            eprintln!("Please stage your changes first using 'git add .' or 'git add <files>'.");
        }
    }

    Ok(())
}

/// Install the stderr log subscriber; stdout stays reserved for the message.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("diffscribe=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
