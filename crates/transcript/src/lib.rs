//! Transcript data model shared by the attribution pipeline.
//!
//! Timestamps are seconds. Words that the upstream transcriber could not
//! time carry `None` timestamps, which propagate through the pipeline
//! rather than being coerced to zero.

use serde::{Deserialize, Serialize};

pub mod srt;

/// Speaker label used when no speaker could be resolved.
pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// One word of a transcript segment.
///
/// `text_start`/`text_end` are half-open *character* offsets into the owning
/// segment's text; the word does not own its text. A word carries either
/// full timing or none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSpan {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub text_start: usize,
    pub text_end: usize,
    pub speaker: Option<String>,
}

impl WordSpan {
    pub fn new(start: Option<f64>, end: Option<f64>, text_start: usize, text_end: usize) -> Self {
        Self {
            start,
            end,
            text_start,
            text_end,
            speaker: None,
        }
    }

    /// Both timestamps, or `None` if the word is untimed.
    pub fn timing(&self) -> Option<(f64, f64)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// A transcribed segment with word-level sub-intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub words: Vec<WordSpan>,
    /// Dominant speaker, filled in by attribution.
    pub speaker: Option<String>,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>, words: Vec<WordSpan>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            words,
            speaker: None,
        }
    }

    /// Whether any word carries its own start timestamp.
    pub fn has_timed_words(&self) -> bool {
        self.words.iter().any(|w| w.start.is_some())
    }

    /// Slice the segment text by a word's character offsets.
    pub fn span_text(&self, span: &WordSpan) -> String {
        self.text
            .chars()
            .skip(span.text_start)
            .take(span.text_end.saturating_sub(span.text_start))
            .collect()
    }
}

/// One flattened, speaker-prefixed word, ready for subtitle rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordUtterance {
    pub start: f64,
    pub end: f64,
    pub text: String,
}
