use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::context::AppContext;
use crate::domain::diff::ReducedDiff;
use crate::domain::prompt::PromptTemplate;
use crate::error::{AppError, AppResult};
use crate::output::OutputTarget;

pub struct SummarizeRequest {
    pub diff_file: PathBuf,
    pub template_file: PathBuf,
    pub output: OutputTarget,
}

/// Read a diff artifact, reduce it to its added lines, render the prompt and
/// hand it to the language model, then write the reply to the chosen target.
pub async fn summarize_diff(ctx: &AppContext, request: &SummarizeRequest) -> AppResult<String> {
    let diff_text = fs::read_to_string(&request.diff_file).map_err(|err| {
        AppError::Input(format!(
            "cannot read diff file {}: {err}",
            request.diff_file.display()
        ))
    })?;

    let reduced = ReducedDiff::from_diff(&diff_text);
    if reduced.is_empty() {
        info!("diff contains no added lines; the model will be asked to summarize an empty diff");
    } else {
        info!("reduced diff to {} added lines", reduced.line_count());
    }

    let template = PromptTemplate::load(&request.template_file)?;
    let prompt = template.render(reduced.as_text());

    info!("requesting summary from language model");
    let summary = ctx.language_model.generate_completion(&prompt).await?;

    request.output.write(&summary)?;
    Ok(summary)
}
