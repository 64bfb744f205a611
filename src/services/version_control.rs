use async_trait::async_trait;

use crate::domain::diff::{DiffDocument, DiffRequest};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn diff_against_upstream(&self, request: &DiffRequest) -> AppResult<DiffDocument>;
}
