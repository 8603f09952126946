//! Content source collaborators: where experience reports come from.

pub mod local;
#[cfg(feature = "fetch")]
pub mod remote;

use crate::error::{Result, RetellError};
use crate::report::Experience;
use async_trait::async_trait;

/// Supplies an experience report given a reference, or picks one
/// arbitrarily when no reference is given.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, reference: Option<&str>) -> Result<Experience>;

    /// Name for logging/diagnostics.
    fn name(&self) -> &'static str;
}

/// Mock source for testing.
#[derive(Debug, Clone)]
pub struct MockContentSource {
    experience: Experience,
    should_fail: bool,
}

impl MockContentSource {
    pub fn new(experience: Experience) -> Self {
        Self {
            experience,
            should_fail: false,
        }
    }

    /// Configure the mock to fail on fetch.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch(&self, _reference: Option<&str>) -> Result<Experience> {
        if self.should_fail {
            return Err(RetellError::SourceFetch {
                message: "mock fetch failure".to_string(),
            });
        }
        Ok(self.experience.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
