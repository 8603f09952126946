//! The final concatenated waveform.

use crate::error::{Result, RetellError};
use crate::synth::Waveform;
use std::path::Path;

/// An append-only sequence of mono sample frames at a fixed rate.
///
/// The rate is fixed at construction; appending a waveform at any other
/// rate is an error. Once assembly completes the track is the pipeline's
/// terminal artifact and is never mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioTrack {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Append a synthesized waveform. The waveform's rate must match the
    /// track's rate; mixing rates mid-run aborts assembly.
    pub fn append_waveform(&mut self, waveform: &Waveform) -> Result<()> {
        if waveform.sample_rate != self.sample_rate {
            return Err(RetellError::SampleRateMismatch {
                expected: self.sample_rate,
                actual: waveform.sample_rate,
            });
        }
        self.samples.extend_from_slice(&waveform.samples);
        Ok(())
    }

    /// Append `secs` of silence at the track's rate.
    pub fn append_silence(&mut self, secs: f32) {
        let count = (secs as f64 * self.sample_rate as f64) as usize;
        self.samples.extend(std::iter::repeat_n(0.0, count));
    }

    /// Write the track as a 32-bit float WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };

        let mut writer =
            hound::WavWriter::create(path, spec).map_err(|e| RetellError::ArtifactWrite {
                message: format!("cannot create {}: {}", path.display(), e),
            })?;
        for &sample in &self.samples {
            writer
                .write_sample(sample)
                .map_err(|e| RetellError::ArtifactWrite {
                    message: format!("cannot write {}: {}", path.display(), e),
                })?;
        }
        writer.finalize().map_err(|e| RetellError::ArtifactWrite {
            message: format!("cannot finalize {}: {}", path.display(), e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(samples: Vec<f32>, sample_rate: u32) -> Waveform {
        Waveform {
            samples,
            sample_rate,
        }
    }

    #[test]
    fn appends_waveforms_in_order() {
        let mut track = AudioTrack::new(16000);
        track.append_waveform(&wave(vec![0.1, 0.2], 16000)).unwrap();
        track.append_waveform(&wave(vec![0.3], 16000)).unwrap();

        assert_eq!(track.samples(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn silence_length_matches_rate() {
        let mut track = AudioTrack::new(16000);
        track.append_silence(0.5);

        assert_eq!(track.len(), 8000);
        assert!(track.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn fractional_silence_truncates_like_the_source_rate_product() {
        let mut track = AudioTrack::new(22050);
        track.append_silence(0.1);

        // 0.1 * 22050 = 2205
        assert_eq!(track.len(), 2205);
    }

    #[test]
    fn zero_silence_appends_nothing() {
        let mut track = AudioTrack::new(16000);
        track.append_silence(0.0);
        assert!(track.is_empty());
    }

    #[test]
    fn rejects_mismatched_sample_rate() {
        let mut track = AudioTrack::new(22050);
        let result = track.append_waveform(&wave(vec![0.1], 16000));

        match result {
            Err(RetellError::SampleRateMismatch { expected, actual }) => {
                assert_eq!(expected, 22050);
                assert_eq!(actual, 16000);
            }
            other => panic!("Expected SampleRateMismatch, got {:?}", other),
        }
        // Nothing was appended.
        assert!(track.is_empty());
    }

    #[test]
    fn duration_reflects_samples_and_rate() {
        let mut track = AudioTrack::new(8000);
        track.append_waveform(&wave(vec![0.0; 4000], 8000)).unwrap();
        assert_eq!(track.duration_secs(), 0.5);
    }

    #[test]
    fn write_wav_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");

        let mut track = AudioTrack::new(16000);
        track
            .append_waveform(&wave(vec![0.0, 0.25, -0.25, 1.0], 16000))
            .unwrap();
        track.write_wav(&path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);

        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0.0, 0.25, -0.25, 1.0]);
    }

    #[test]
    fn write_wav_to_bad_path_fails_with_artifact_error() {
        let track = AudioTrack::new(16000);
        let result = track.write_wav(Path::new("/nonexistent-dir/out.wav"));

        assert!(matches!(result, Err(RetellError::ArtifactWrite { .. })));
    }
}
