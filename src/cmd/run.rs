use std::path::PathBuf;

use clap::Args;

use crate::cmd::diff::{self as diff_cmd, DiffArgs};
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputTarget;
use crate::workflow::summarize::{SummarizeRequest, summarize_diff};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub diff: DiffArgs,
    /// Path of the prompt template containing the ${diff_content} placeholder.
    #[arg(long, default_value = config::DEFAULT_PROMPT_FILE)]
    pub prompt: PathBuf,
    /// Where the summary is written; pass an empty value to print to the console.
    #[arg(long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: String,
}

/// Produce the diff artifact, then summarize it. The summarizer only runs if
/// the artifact actually exists on disk.
pub async fn run(ctx: &AppContext, args: RunArgs) -> AppResult<()> {
    let diff_file = args.diff.output_file.clone();
    diff_cmd::run(ctx, args.diff).await?;

    if !diff_file.is_file() {
        return Err(AppError::Input(format!(
            "diff artifact {} was not produced",
            diff_file.display()
        )));
    }

    let summarize_request = SummarizeRequest {
        diff_file,
        template_file: args.prompt,
        output: OutputTarget::from_flag(&args.output),
    };
    summarize_diff(ctx, &summarize_request).await?;
    Ok(())
}
