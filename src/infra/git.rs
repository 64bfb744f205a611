use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::domain::diff::{DiffDocument, DiffRequest};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Computes fork-vs-upstream diffs by shelling out to the `git` binary in a
/// temporary clone. The clone directory lives for the duration of one call.
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    async fn run_git(&self, args: &[&str], cwd: Option<&Path>) -> AppResult<Output> {
        debug!("executing command: git {}", args.join(" "));
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        command
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to spawn git: {err}")))
    }

    async fn run_git_checked(&self, args: &[&str], cwd: Option<&Path>) -> AppResult<Output> {
        let output = self.run_git(args, cwd).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git {} failed: {}",
                args.first().copied().unwrap_or("<none>"),
                stderr.trim()
            )));
        }
        Ok(output)
    }
}

/// Arguments for `git diff` against the fetched upstream branch. Filters are
/// appended after the `--` pathspec separator.
fn diff_args(upstream_branch: &str, file_filters: &[String]) -> Vec<String> {
    let mut args = vec![
        "diff".to_string(),
        format!("upstream/{upstream_branch}...HEAD"),
    ];
    if !file_filters.is_empty() {
        args.push("--".to_string());
        args.extend(file_filters.iter().cloned());
    }
    args
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn diff_against_upstream(&self, request: &DiffRequest) -> AppResult<DiffDocument> {
        let workdir = tempfile::tempdir()?;
        info!("created temporary directory: {}", workdir.path().display());

        let forked = workdir.path().join("forked");
        let forked_str = forked.to_string_lossy().into_owned();

        info!(
            "cloning fork repository {} branch {}",
            request.fork_url, request.fork_branch
        );
        self.run_git_checked(
            &[
                "clone",
                "--branch",
                &request.fork_branch,
                &request.fork_url,
                &forked_str,
            ],
            None,
        )
        .await?;

        info!(
            "adding original repository {} as upstream remote",
            request.upstream_url
        );
        self.run_git_checked(
            &["remote", "add", "upstream", &request.upstream_url],
            Some(&forked),
        )
        .await?;

        info!("fetching upstream {} branch", request.upstream_branch);
        self.run_git_checked(
            &["fetch", "upstream", &request.upstream_branch],
            Some(&forked),
        )
        .await?;

        // git diff exit codes: 0 = no diff, 1 = diff found, >1 = error.
        let args = diff_args(&request.upstream_branch, &request.file_filters);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self.run_git(&arg_refs, Some(&forked)).await?;

        let code = output.status.code().unwrap_or(-1);
        if code > 1 || code < 0 {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git diff failed with exit code {code}: {}",
                stderr.trim()
            )));
        }

        let diff_text = String::from_utf8_lossy(&output.stdout).into_owned();
        if diff_text.is_empty() && code == 0 {
            info!("no differences found between branches");
        } else if diff_text.is_empty() && code == 1 {
            warn!(
                "git diff reported differences (exit code 1) but produced no output: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(DiffDocument::new(diff_text))
    }
}
