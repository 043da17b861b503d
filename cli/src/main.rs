//! CLI for converting a todo file into GitHub issues.
//!
//! Runs as a GitHub Action (inputs from `INPUT_*` variables, outputs to
//! `GITHUB_OUTPUT`) or locally with flags.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_issues::{
    ActionInputs, ActionOutputs, GitHubTracker, Repository, RunSummary, Runner, RunnerConfig,
    RunnerError,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Todo Issues - Create GitHub issues from a todo.md file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository to create issues in, as owner/name.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// GitHub token. Overrides the `github-token` input.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Todo file to convert. Overrides the `todo-file-path` input.
    #[arg(long)]
    todo_file_path: Option<PathBuf>,

    /// Comma separated labels. Overrides the `labels` input.
    #[arg(long)]
    labels: Option<String>,

    /// Delete the todo file after creating issues.
    #[arg(long)]
    delete_todo_after: bool,

    /// Path to the label definitions file.
    #[arg(long, default_value = ".github/labels.yml")]
    labels_config: PathBuf,

    /// Preview issues without creating them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Merges flags over action inputs.
fn resolve_inputs(args: &Args) -> Result<ActionInputs, RunnerError> {
    let mut inputs = ActionInputs::from_env()?;
    if let Some(token) = &args.token {
        inputs.github_token = Some(token.clone());
    }
    if let Some(path) = &args.todo_file_path {
        inputs.todo_file_path = path.clone();
    }
    if let Some(labels) = &args.labels {
        inputs.labels = labels.clone();
    }
    inputs.delete_todo_after |= args.delete_todo_after;
    Ok(inputs)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let inputs = resolve_inputs(&args)?;
    let repository: Repository = args.repository.parse()?;

    let tracker = match inputs.token_for_run(args.dry_run)? {
        Some(token) => GitHubTracker::from_token(token, repository)?,
        None => GitHubTracker::anonymous(repository)?,
    };

    let config = RunnerConfig::from_inputs(&inputs, args.dry_run)
        .with_labels_path(args.labels_config);
    let summary = Runner::new(config, tracker).run().await?;

    ActionOutputs::from_env().record_summary(&summary)?;
    Ok(summary)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Issues found: {}", summary.issues_found);

    if !summary.dry_run {
        println!("  Issues created: {}", summary.issues_created());
        println!("  Issues failed: {}", summary.issues_failed);
        for issue in &summary.created {
            println!("    #{} {} ({})", issue.number, issue.title, issue.url);
        }
        if summary.todo_deleted {
            println!("  Todo file deleted");
        }
    }
}
