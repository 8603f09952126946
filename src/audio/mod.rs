//! Audio track assembly and WAV output.

pub mod track;

pub use track::AudioTrack;
