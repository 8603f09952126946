//! External-command synthesizer.
//!
//! Runs a configurable TTS command per segment (piper-style: text on
//! stdin, WAV stream on stdout) and decodes the result with hound.

use crate::error::{Result, RetellError};
use crate::synth::synthesizer::{Synthesizer, Waveform};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

/// Configuration for the external synthesis command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthConfig {
    /// Executable to run for each segment.
    pub command: String,
    /// Arguments passed to the command. The defaults suit piper, which
    /// writes a WAV stream to stdout with `--output_file -`.
    pub args: Vec<String>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            command: crate::defaults::DEFAULT_SYNTH_COMMAND.to_string(),
            args: vec!["--output_file".to_string(), "-".to_string()],
        }
    }
}

/// Synthesizer that shells out to an external TTS command.
///
/// The command is spawned once per segment; a loaded model process kept
/// warm between runs is the tool's concern, not ours.
pub struct CommandSynthesizer {
    config: SynthConfig,
}

impl CommandSynthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }
}

impl Synthesizer for CommandSynthesizer {
    fn synthesize(&mut self, text: &str) -> Result<Waveform> {
        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RetellError::SynthToolNotFound {
                        tool: self.config.command.clone(),
                    }
                } else {
                    RetellError::Synthesis {
                        message: format!("failed to spawn '{}': {}", self.config.command, e),
                    }
                }
            })?;

        // stdin is piped above, so take() cannot return None here.
        // Write errors (EPIPE from a tool that dies before reading) are
        // ignored; the exit status below carries the real failure.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).ok();
            stdin.write_all(b"\n").ok();
        }

        let output = child.wait_with_output().map_err(|e| RetellError::Synthesis {
            message: format!("'{}' did not finish: {}", self.config.command, e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RetellError::Synthesis {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.config.command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        decode_wav(&output.stdout).map_err(|message| RetellError::Synthesis {
            message: format!("'{}' produced invalid audio: {}", self.config.command, message),
        })
    }

    fn name(&self) -> &str {
        &self.config.command
    }
}

/// Decode a WAV byte stream into a mono f32 waveform.
///
/// Stereo input is downmixed by averaging channel pairs; integer samples
/// are scaled into [-1.0, 1.0].
fn decode_wav(bytes: &[u8]) -> std::result::Result<Waveform, String> {
    let mut reader =
        hound::WavReader::new(Cursor::new(bytes)).map_err(|e| format!("not a WAV stream: {e}"))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| format!("bad float samples: {e}"))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| format!("bad integer samples: {e}"))?
        }
    };

    let samples = if spec.channels == 2 {
        samples
            .chunks_exact(2)
            .map(|pair| (pair[0] + pair[1]) / 2.0)
            .collect()
    } else {
        samples
    };

    Ok(Waveform {
        samples,
        sample_rate: spec.sample_rate,
    })
}
