use std::path::PathBuf;

use clap::Args;

use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputTarget;
use crate::workflow::summarize::{SummarizeRequest, summarize_diff};

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Path of the diff file to summarize.
    pub diff_file: PathBuf,
    /// Path of the prompt template containing the ${diff_content} placeholder.
    #[arg(long, default_value = config::DEFAULT_PROMPT_FILE)]
    pub prompt: PathBuf,
    /// Where the summary is written; pass an empty value to print to the console.
    #[arg(long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: String,
}

pub async fn run(ctx: &AppContext, args: SummarizeArgs) -> AppResult<()> {
    let request = SummarizeRequest {
        diff_file: args.diff_file,
        template_file: args.prompt,
        output: OutputTarget::from_flag(&args.output),
    };
    summarize_diff(ctx, &request).await?;
    Ok(())
}
