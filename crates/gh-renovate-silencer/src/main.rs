use anyhow::Result;
use clap::Parser;
use gh_client::{OctocrabClient, TokenResolver};

mod classifier;
mod config;
mod mutator;
mod progress;
mod run;
#[cfg(test)]
mod test_support;

use config::{Config, FileConfig};
use progress::LogSink;

/// Silence GitHub notifications from Renovate bot
#[derive(Parser)]
#[command(name = "gh-renovate-silencer", version)]
struct Cli {
    /// GitHub personal access token (falls back to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`)
    #[arg(short, long)]
    token: Option<String>,

    /// Repository to exclude from silencing (owner/repo, can be given multiple times)
    #[arg(short, long = "exclude", value_name = "REPO")]
    exclude: Vec<String>,

    /// Show what would be done without actually doing it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A .env file is optional
    let _ = dotenvy::dotenv();

    init_logger(cli.verbose);

    let file_config = FileConfig::load();
    let token = TokenResolver::new().resolve(cli.token.as_deref()).await?;
    let config = Config::new(
        token,
        cli.exclude,
        file_config.exclude_repos,
        cli.dry_run,
        cli.verbose,
    );

    log::debug!(
        "Run config: dry_run={}, verbose={}, {} excluded repositories",
        config.dry_run,
        config.verbose,
        config.exclude_repos.len()
    );

    let client = OctocrabClient::from_token(config.token.as_str())?;
    let sink = LogSink;

    let summary = run::run(&client, &sink, &config).await?;

    if summary.is_empty() {
        println!("No Renovate notifications found to process.");
        return Ok(());
    }

    if config.dry_run {
        println!(
            "Dry run: {} notification(s) would be marked as read, {} as done",
            summary.unread_matched, summary.incomplete_matched
        );
    } else {
        if summary.outcome.read_count > 0 {
            println!(
                "Successfully marked {} notification(s) as read",
                summary.outcome.read_count
            );
        }
        if summary.outcome.complete_count > 0 {
            println!(
                "Successfully marked {} notification(s) as done",
                summary.outcome.complete_count
            );
        }
        if summary.outcome.read_count == 0 && summary.outcome.complete_count == 0 {
            println!("No notifications were processed.");
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
