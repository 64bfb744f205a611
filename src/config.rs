use std::env;

use crate::error::AppResult;

pub const DEFAULT_UPSTREAM_URL: &str = "https://github.com/HumanSignal/label-studio";
pub const DEFAULT_UPSTREAM_BRANCH: &str = "develop";
pub const DEFAULT_DIFF_FILE: &str = "diff.txt";
pub const DEFAULT_PROMPT_FILE: &str = "prompt.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub max_output_tokens: u32,
}

impl AppConfig {
    /// Resolve the configuration from the process environment, once, at
    /// startup. Nothing else in the crate reads environment variables.
    pub fn from_env() -> AppResult<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let gemini_model = env::var("DIFFSUM_GEMINI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        })
    }
}
