//! Deduplicating track assembly.
//!
//! Drives the synthesis collaborator once per non-duplicate segment,
//! strictly in narration order, and concatenates the results with the
//! segments' trailing pauses as injected silence.

use crate::audio::AudioTrack;
use crate::error::{Result, RetellError};
use crate::output;
use crate::synth::Synthesizer;
use crate::text::{Segment, normalize};

/// Assembles segments into one continuous track.
pub struct Assembler {
    quiet: bool,
}

impl Assembler {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Synthesize `segments` in order into a single track.
    ///
    /// A segment whose normalized, lowercased text equals the previously
    /// spoken one is dropped entirely: no synthesis call, no silence.
    /// The track's sample rate is fixed by the first synthesized waveform;
    /// any later rate change aborts assembly. Synthesis failures propagate
    /// unchanged, so a partial track is never returned as if complete.
    pub fn assemble(&self, segments: &[Segment], synth: &mut dyn Synthesizer) -> Result<AudioTrack> {
        let mut track: Option<AudioTrack> = None;
        let mut last_spoken: Option<String> = None;
        let total = segments.len();

        for (i, segment) in segments.iter().enumerate() {
            let key = normalize(&segment.text).to_lowercase();
            if last_spoken.as_deref() == Some(key.as_str()) {
                if !self.quiet {
                    output::skipped(i + 1, total);
                }
                continue;
            }

            if !self.quiet {
                output::progress(i + 1, total, &segment.text);
            }

            let waveform = synth.synthesize(&segment.text)?;
            let track = track.get_or_insert_with(|| AudioTrack::new(waveform.sample_rate));
            track.append_waveform(&waveform)?;
            track.append_silence(segment.pause_secs);

            last_spoken = Some(key);
        }

        track.ok_or(RetellError::EmptyScript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::MockSynthesizer;

    const RATE: u32 = 16000;

    fn seg(text: &str, pause_secs: f32) -> Segment {
        Segment {
            text: text.to_string(),
            pause_secs,
        }
    }

    fn silence_len(secs: f32) -> usize {
        (secs as f64 * RATE as f64) as usize
    }

    #[test]
    fn consecutive_duplicates_are_skipped() {
        let segments = vec![seg("hi", 0.1), seg("hi", 0.1), seg("bye", 0.2)];
        let mut synth = MockSynthesizer::new(RATE);

        let track = Assembler::new(true).assemble(&segments, &mut synth).unwrap();

        assert_eq!(synth.calls(), ["hi", "bye"]);
        let expected = synth.samples_for("hi")
            + silence_len(0.1)
            + synth.samples_for("bye")
            + silence_len(0.2);
        assert_eq!(track.len(), expected);
    }

    #[test]
    fn duplicate_detection_ignores_case_and_whitespace() {
        let segments = vec![seg("Hello  there", 0.1), seg("hello there", 0.1)];
        let mut synth = MockSynthesizer::new(RATE);

        Assembler::new(true).assemble(&segments, &mut synth).unwrap();

        assert_eq!(synth.calls().len(), 1);
        // The original-case text is what gets spoken.
        assert_eq!(synth.calls()[0], "Hello  there");
    }

    #[test]
    fn non_consecutive_repeats_are_kept() {
        let segments = vec![seg("a", 0.1), seg("b", 0.1), seg("a", 0.1)];
        let mut synth = MockSynthesizer::new(RATE);

        Assembler::new(true).assemble(&segments, &mut synth).unwrap();

        assert_eq!(synth.calls(), ["a", "b", "a"]);
    }

    #[test]
    fn synthesis_order_matches_segment_order() {
        let segments = vec![seg("one", 0.0), seg("two", 0.0), seg("three", 0.0)];
        let mut synth = MockSynthesizer::new(RATE);

        Assembler::new(true).assemble(&segments, &mut synth).unwrap();

        assert_eq!(synth.calls(), ["one", "two", "three"]);
    }

    #[test]
    fn pause_is_inserted_after_each_spoken_segment() {
        let segments = vec![seg("x", 1.0)];
        let mut synth = MockSynthesizer::new(RATE);

        let track = Assembler::new(true).assemble(&segments, &mut synth).unwrap();

        let speech = synth.samples_for("x");
        assert_eq!(track.len(), speech + silence_len(1.0));
        // The tail of the track is the injected silence.
        assert!(track.samples()[speech..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn synthesis_failure_propagates_without_partial_track() {
        let segments = vec![seg("hello", 0.1)];
        let mut synth = MockSynthesizer::new(RATE).with_failure();

        let result = Assembler::new(true).assemble(&segments, &mut synth);
        assert!(matches!(result, Err(RetellError::Synthesis { .. })));
    }

    #[test]
    fn empty_segment_list_is_an_error() {
        let mut synth = MockSynthesizer::new(RATE);
        let result = Assembler::new(true).assemble(&[], &mut synth);

        assert!(matches!(result, Err(RetellError::EmptyScript)));
    }

    #[test]
    fn track_rate_comes_from_first_waveform() {
        let segments = vec![seg("hi", 0.0)];
        let mut synth = MockSynthesizer::new(22050);

        let track = Assembler::new(true).assemble(&segments, &mut synth).unwrap();
        assert_eq!(track.sample_rate(), 22050);
    }

    #[test]
    fn assembly_is_deterministic() {
        let segments = vec![seg("one.", 0.3), seg("two.", 0.3), seg("two.", 0.3)];

        let mut synth_a = MockSynthesizer::new(RATE);
        let mut synth_b = MockSynthesizer::new(RATE);
        let track_a = Assembler::new(true).assemble(&segments, &mut synth_a).unwrap();
        let track_b = Assembler::new(true).assemble(&segments, &mut synth_b).unwrap();

        assert_eq!(track_a, track_b);
    }
}
