use crate::error::{Result, RetellError};

/// Synthesized audio for one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Mono samples in the range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz. Expected to be identical across all calls
    /// within one run.
    pub sample_rate: u32,
}

impl Waveform {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Trait for text-to-speech synthesis.
///
/// Implementations are treated as heavyweight, stateful resources: the
/// assembler invokes them strictly in sequence, never concurrently.
pub trait Synthesizer: Send {
    /// Synthesize one piece of text into a waveform.
    ///
    /// Failures propagate; the engine never retries or substitutes silence.
    fn synthesize(&mut self, text: &str) -> Result<Waveform>;

    /// Name for logging/diagnostics.
    fn name(&self) -> &str;
}

/// Mock synthesizer for testing.
///
/// Produces a deterministic waveform whose length is proportional to the
/// input text and records every call, so tests can assert both invocation
/// counts and exact track layout.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    sample_rate: u32,
    samples_per_char: usize,
    calls: Vec<String>,
    should_fail: bool,
}

impl MockSynthesizer {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples_per_char: 100,
            calls: Vec::new(),
            should_fail: false,
        }
    }

    /// Configure the mock to fail on synthesize.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Texts synthesized so far, in call order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Sample count the mock produces for a given text.
    pub fn samples_for(&self, text: &str) -> usize {
        text.chars().count() * self.samples_per_char
    }
}

impl Synthesizer for MockSynthesizer {
    fn synthesize(&mut self, text: &str) -> Result<Waveform> {
        if self.should_fail {
            return Err(RetellError::Synthesis {
                message: "mock synthesis failure".to_string(),
            });
        }
        self.calls.push(text.to_string());

        // Deterministic ramp derived only from the text length.
        let len = self.samples_for(text);
        let samples = (0..len).map(|i| (i % 100) as f32 / 1000.0).collect();

        Ok(Waveform {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
