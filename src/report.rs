//! Experience reports: the input record the pipeline narrates, plus the
//! narration script built from one.

use crate::error::{Result, RetellError};
use serde::{Deserialize, Serialize};

/// One structured dose entry attached to a report.
///
/// Only `substance` is read by the engine; the remaining fields ride along
/// for serde compatibility with the wire format and for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseRecord {
    pub substance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

impl DoseRecord {
    pub fn new(substance: &str) -> Self {
        Self {
            substance: substance.to_string(),
            amount: None,
            method: None,
            form: None,
        }
    }
}

/// One retrieved experience report. Immutable once fetched; each pipeline
/// invocation owns exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub title: String,
    pub author: String,
    #[serde(default = "unknown")]
    pub age: String,
    #[serde(default = "unknown")]
    pub gender: String,
    pub content: String,
    #[serde(default)]
    pub doses: Vec<DoseRecord>,
}

fn unknown() -> String {
    "Unknown".to_string()
}

impl Experience {
    /// Check the shape constraints the engine depends on.
    ///
    /// A report without narrative content cannot produce a track; this is
    /// a hard failure, not something to paper over with silence.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(RetellError::InputShape {
                field: "content".to_string(),
            });
        }
        Ok(())
    }
}

/// Which framing lines the narration script includes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScriptConfig {
    pub intro: bool,
    pub outro: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            intro: true,
            outro: true,
        }
    }
}

/// Build the raw narration script for a report.
///
/// The result is free text headed for the normalizer and segmenter; line
/// breaks here are cosmetic and collapse away downstream. `primary` is the
/// classifier's label and is announced as metadata, it does not influence
/// how the content itself is spoken.
pub fn narration_script(experience: &Experience, primary: &str, config: &ScriptConfig) -> String {
    let mut script = String::new();

    if config.intro {
        script.push_str("Welcome.\n\nThis is a narrated experience report.\n\n");
    }

    script.push_str(&format!(
        "{}.\n\nSubmitted by {}.\nAge: {}. Gender: {}.\n\nPrimary substance: {}.\n\n{}\n",
        experience.title,
        experience.author,
        experience.age,
        experience.gender,
        primary,
        experience.content,
    ));

    if config.outro {
        script.push_str("\nThank you for listening.\n");
    }

    script
}
