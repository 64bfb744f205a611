mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod output;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::diff::{self as diff_cmd, DiffArgs};
use crate::cmd::run::{self as run_cmd, RunArgs};
use crate::cmd::summarize::{self as summarize_cmd, SummarizeArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::llm::GeminiClient;
use crate::services::{LanguageModelService, VersionControlService};

#[derive(Parser)]
#[command(
    name = "diffsum",
    author,
    version,
    about = "Summarize fork diffs with a language model"
)]
struct Cli {
    /// Enable verbose logging (DEBUG level).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect the diff between a fork and its original repository.
    Diff(DiffArgs),
    /// Summarize a previously collected diff file.
    Summarize(SummarizeArgs),
    /// Collect the diff and summarize it in one invocation.
    Run(RunArgs),
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::from_env()?;

    if config.gemini_api_key.is_none()
        && matches!(&cli.command, Commands::Summarize(_) | Commands::Run(_))
    {
        eprintln!("Warning: GEMINI_API_KEY not set; summary generation will fail.");
    }

    let context = build_context(config);

    match cli.command {
        Commands::Diff(args) => diff_cmd::run(&context, args).await,
        Commands::Summarize(args) => summarize_cmd::run(&context, args).await,
        Commands::Run(args) => run_cmd::run(&context, args).await,
    }
}

fn build_context(config: AppConfig) -> AppContext {
    let language_model: Arc<dyn LanguageModelService> = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.max_output_tokens,
    ));
    let version_control: Arc<dyn VersionControlService> = Arc::new(GitCli::new());

    AppContext::new(config, version_control, language_model)
}
