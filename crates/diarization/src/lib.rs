use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum DiarizationError {
    #[error("model not loaded")]
    ModelNotLoaded,
    #[error("processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, DiarizationError>;

/// One speaker-labeled interval of the audio timeline, in seconds.
///
/// Turns are kept in detection order; downstream consumers must not rely on
/// them being sorted or non-overlapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

impl SpeakerTurn {
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

pub trait Diarizer: Send + Sync {
    /// Partition 16kHz mono audio into speaker-labeled turns.
    ///
    /// `min_speakers`/`max_speakers` bound the speaker count when the
    /// backing model supports it; `None` leaves it to the model.
    fn diarize(
        &self,
        audio_16k_mono: &[f32],
        min_speakers: Option<u32>,
        max_speakers: Option<u32>,
    ) -> Result<Vec<SpeakerTurn>>;
}
