use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::context::AppContext;
use crate::domain::diff::{DiffRequest, DiffStats};
use crate::error::{AppError, AppResult};

pub struct DiffOutcome {
    pub output_file: PathBuf,
    pub stats: DiffStats,
}

/// Compute the fork-vs-upstream diff and persist it as a plain-text artifact.
pub async fn produce_diff(
    ctx: &AppContext,
    request: &DiffRequest,
    output_file: &Path,
) -> AppResult<DiffOutcome> {
    info!(
        "starting diff collection for fork {} (branch {}) against original {} (branch {})",
        request.fork_url, request.fork_branch, request.upstream_url, request.upstream_branch
    );

    let document = ctx.version_control.diff_against_upstream(request).await?;
    let stats = document.stats();
    info!(
        "diff analysis complete: {} additions, {} deletions",
        stats.additions, stats.deletions
    );

    fs::write(output_file, &document.text).map_err(|err| {
        AppError::Output(format!(
            "failed to write diff to {}: {err}",
            output_file.display()
        ))
    })?;
    info!("saved diff output to {}", output_file.display());

    Ok(DiffOutcome {
        output_file: output_file.to_path_buf(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::diff::DiffDocument;
    use crate::services::{LanguageModelService, VersionControlService};

    struct FixedDiff(&'static str);

    #[async_trait]
    impl VersionControlService for FixedDiff {
        async fn diff_against_upstream(&self, _request: &DiffRequest) -> AppResult<DiffDocument> {
            Ok(DiffDocument::new(self.0.to_string()))
        }
    }

    struct UnusedModel;

    #[async_trait]
    impl LanguageModelService for UnusedModel {
        async fn generate_completion(&self, _prompt: &str) -> AppResult<String> {
            panic!("language model must not be called while producing a diff");
        }
    }

    fn context(diff: &'static str) -> AppContext {
        let config = AppConfig {
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 64,
        };
        AppContext::new(config, Arc::new(FixedDiff(diff)), Arc::new(UnusedModel))
    }

    fn request() -> DiffRequest {
        DiffRequest {
            fork_url: "https://example.com/fork.git".to_string(),
            fork_branch: "feature".to_string(),
            upstream_url: "https://example.com/upstream.git".to_string(),
            upstream_branch: "develop".to_string(),
            file_filters: vec![],
        }
    }

    #[tokio::test]
    async fn writes_artifact_and_counts_changes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("diff.txt");

        let outcome = produce_diff(&context("+++ b/f.py\n+foo\n-bar"), &request(), &out)
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "+++ b/f.py\n+foo\n-bar");
        assert_eq!(outcome.stats.additions, 1);
        assert_eq!(outcome.stats.deletions, 1);
    }

    #[tokio::test]
    async fn empty_diff_is_written_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("diff.txt");

        let outcome = produce_diff(&context(""), &request(), &out).await.unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "");
        assert_eq!(outcome.stats.additions, 0);
    }
}
