use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{AppError, AppResult};

/// Destination for the final summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// An explicitly empty `--output` value selects the console.
    pub fn from_flag(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    pub fn write(&self, text: &str) -> AppResult<()> {
        match self {
            Self::Stdout => {
                println!("{text}");
                Ok(())
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|err| {
                        AppError::Output(format!(
                            "cannot create directory {}: {err}",
                            parent.display()
                        ))
                    })?;
                }
                fs::write(path, text).map_err(|err| {
                    AppError::Output(format!("cannot write {}: {err}", path.display()))
                })?;
                info!("summary written to {}", path.display());
                Ok(())
            }
        }
    }
}
