//! Error types for retell.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetellError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Source errors
    #[error("Failed to fetch report: {message}")]
    SourceFetch { message: String },

    #[error("Failed to decode report: {message}")]
    SourceDecode { message: String },

    #[error("Report is missing required field '{field}'")]
    InputShape { field: String },

    // Synthesis errors
    #[error("Synthesis tool not found: {tool}")]
    SynthToolNotFound { tool: String },

    #[error("Synthesis failed: {message}")]
    Synthesis { message: String },

    #[error("Sample rate mismatch: track is {expected} Hz, synthesizer returned {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    // Assembly errors
    #[error("Narration script produced no speakable segments")]
    EmptyScript,

    // Artifact errors
    #[error("Failed to write audio track: {message}")]
    ArtifactWrite { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl RetellError {
    /// Pipeline stage at which this error aborted the run.
    ///
    /// Normalization, segmentation and classification are total and never
    /// appear here; only configuration, fetch, synthesis and artifact
    /// output can fail.
    pub fn stage(&self) -> &'static str {
        match self {
            RetellError::ConfigFileNotFound { .. }
            | RetellError::ConfigInvalidValue { .. }
            | RetellError::Config(_) => "configuration",
            RetellError::SourceFetch { .. }
            | RetellError::SourceDecode { .. }
            | RetellError::InputShape { .. } => "fetch",
            RetellError::SynthToolNotFound { .. }
            | RetellError::Synthesis { .. }
            | RetellError::SampleRateMismatch { .. }
            | RetellError::EmptyScript => "synthesis",
            RetellError::ArtifactWrite { .. } => "output",
            RetellError::Io(_) | RetellError::Other(_) => "pipeline",
        }
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, RetellError>;
