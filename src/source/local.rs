//! Local report source: a JSON file or stdin.
//!
//! Lets the pipeline run offline on an already-retrieved report, and makes
//! the orchestrator testable without a network.

use crate::error::{Result, RetellError};
use crate::report::Experience;
use crate::source::ContentSource;
use async_trait::async_trait;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source that reads one Experience as JSON from a file, or from stdin
/// when constructed without a path.
pub struct LocalSource {
    path: Option<PathBuf>,
}

impl LocalSource {
    pub fn from_file(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
        }
    }

    pub fn from_stdin() -> Self {
        Self { path: None }
    }

    fn read_contents(&self) -> Result<String> {
        match &self.path {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|e| RetellError::SourceFetch {
                    message: format!("cannot read {}: {}", path.display(), e),
                })
            }
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut buffer)
                    .map_err(|e| RetellError::SourceFetch {
                        message: format!("cannot read stdin: {}", e),
                    })?;
                Ok(buffer)
            }
        }
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn fetch(&self, _reference: Option<&str>) -> Result<Experience> {
        let contents = self.read_contents()?;
        serde_json::from_str(&contents).map_err(|e| RetellError::SourceDecode {
            message: format!("invalid report JSON: {}", e),
        })
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
