//! Speech synthesis collaborators.
//!
//! The engine treats synthesis as an opaque function from text to a
//! waveform at a fixed sample rate. The trait allows swapping the real
//! external-command backend for a mock in tests.

pub mod command;
pub mod synthesizer;

pub use command::CommandSynthesizer;
pub use synthesizer::{MockSynthesizer, Synthesizer, Waveform};
