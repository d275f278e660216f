mod config;
mod error;
mod github;
mod pipeline;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, parse_username};
use crate::github::client::{GITHUB_API, HttpGithubClient, build_http_client};

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity"
)]
struct Cli {
    /// GitHub username
    #[arg(value_parser = parse_username)]
    username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = GITHUB_API)]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit with clap's code 2 before any request is made.
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_raw_values(Some(&cli.api_url), &cli.username);
    match run(config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<usize> {
    let http_client = build_http_client().context("failed to build HTTP client")?;
    let github_client = HttpGithubClient::new(http_client, config.api_url);

    let mut stdout = std::io::stdout().lock();
    let written = pipeline::print_activity(&github_client, &config.username, &mut stdout).await?;
    Ok(written)
}

/// Logs go to stderr so stdout carries nothing but event lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("github_activity=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_takes_one_username() {
        let cli = Cli::try_parse_from(["github-activity", "octocat"]).unwrap();
        assert_eq!(cli.username, "octocat");
        assert_eq!(cli.api_url, GITHUB_API);
    }

    #[test]
    fn test_cli_api_url_override() {
        let cli = Cli::try_parse_from([
            "github-activity",
            "--api-url",
            "http://localhost:9000",
            "octocat",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://localhost:9000");
    }

    #[test]
    fn test_cli_missing_username_is_usage_error() {
        let err = Cli::try_parse_from(["github-activity"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["github-activity", "octocat", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_dot_segment_username_is_usage_error() {
        for name in [".", ".."] {
            let err = Cli::try_parse_from(["github-activity", name]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_cli_empty_username_is_usage_error() {
        let err = Cli::try_parse_from(["github-activity", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }
}
