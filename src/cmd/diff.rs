use std::path::PathBuf;

use clap::Args;

use crate::config;
use crate::context::AppContext;
use crate::domain::diff::DiffRequest;
use crate::error::AppResult;
use crate::workflow::diff::produce_diff;

#[derive(Args, Debug, Clone)]
pub struct DiffArgs {
    /// URL of the forked repository (e.g., https://github.com/user/repo.git).
    pub fork_url: String,
    /// Branch in the forked repository.
    pub fork_branch: String,
    /// URL of the original repository the fork is compared against.
    #[arg(long, default_value = config::DEFAULT_UPSTREAM_URL)]
    pub original_url: String,
    /// Branch in the original repository.
    #[arg(long, default_value = config::DEFAULT_UPSTREAM_BRANCH)]
    pub original_branch: String,
    /// Path of the plain text file the raw diff is written to.
    #[arg(long, default_value = config::DEFAULT_DIFF_FILE)]
    pub output_file: PathBuf,
    /// File filters to apply to the diff (e.g., "*.py" "*.js").
    #[arg(short = 'f', long, num_args = 1..)]
    pub file_filters: Vec<String>,
}

impl DiffArgs {
    pub fn to_request(&self) -> DiffRequest {
        DiffRequest {
            fork_url: self.fork_url.clone(),
            fork_branch: self.fork_branch.clone(),
            upstream_url: self.original_url.clone(),
            upstream_branch: self.original_branch.clone(),
            file_filters: self.file_filters.clone(),
        }
    }
}

pub async fn run(ctx: &AppContext, args: DiffArgs) -> AppResult<()> {
    let request = args.to_request();
    let outcome = produce_diff(ctx, &request, &args.output_file).await?;

    println!("Diff output saved to: {}", outcome.output_file.display());
    println!(
        "Summary: {} additions, {} deletions.",
        outcome.stats.additions, outcome.stats.deletions
    );
    Ok(())
}
