//! The speaker assignment pass.

use voxtag_diarization::SpeakerTurn;
use voxtag_transcript::{TranscriptSegment, WordSpan, WordUtterance, UNKNOWN_SPEAKER};

use crate::interval::intersection;

/// Assign a speaker to every timed word and a dominant speaker to every
/// segment, then flatten the words into a subtitle-ready stream.
///
/// Segments are annotated in place. With `fill_nearest` false, a word only
/// receives a speaker when some turn strictly overlaps it; with
/// `fill_nearest` true, every timed word falls back to the closest turn
/// (largest, possibly negative, intersection). Untimed words never receive
/// a speaker and never appear in the flattened output.
pub fn assign_word_speakers(
    turns: &[SpeakerTurn],
    segments: &mut [TranscriptSegment],
    fill_nearest: bool,
) -> Vec<WordUtterance> {
    tracing::debug!(
        turn_count = turns.len(),
        segment_count = segments.len(),
        fill_nearest = fill_nearest,
        "assign_word_speakers_start"
    );

    for (idx, segment) in segments.iter_mut().enumerate() {
        broadcast_segment_times(segment);

        for word in segment.words.iter_mut() {
            word.speaker = word
                .timing()
                .and_then(|timing| resolve_speaker(turns, timing, fill_nearest));
        }

        let dominant = dominant_speaker(&segment.words);
        tracing::debug!(
            segment = idx,
            word_count = segment.words.len(),
            speaker = %dominant,
            "segment_speaker_resolved"
        );
        segment.speaker = Some(dominant);
    }

    flatten_words(segments)
}

/// A segment with no word-level timing lends its own timestamps to every
/// word, widening matching granularity from word to segment level.
fn broadcast_segment_times(segment: &mut TranscriptSegment) {
    if segment.words.is_empty() || segment.has_timed_words() {
        return;
    }

    for word in segment.words.iter_mut() {
        word.start = Some(segment.start);
        word.end = Some(segment.end);
    }
}

/// Pick the turn with maximal intersection; first turn in table order wins
/// exact ties.
fn resolve_speaker(
    turns: &[SpeakerTurn],
    timing: (f64, f64),
    fill_nearest: bool,
) -> Option<String> {
    let mut best: Option<(&SpeakerTurn, f64)> = None;

    for turn in turns {
        let overlap = intersection((turn.start, turn.end), timing);
        if !fill_nearest && overlap <= 0.0 {
            continue;
        }

        if best.is_none_or(|(_, best_overlap)| overlap > best_overlap) {
            best = Some((turn, overlap));
        }
    }

    let speaker = best.map(|(turn, _)| turn.speaker.clone());
    tracing::trace!(
        word_start = timing.0,
        word_end = timing.1,
        speaker = ?speaker,
        "word_speaker_resolved"
    );
    speaker
}

/// Most frequent resolved speaker label, ties going to the label first
/// encountered in word order. `UNKNOWN` when nothing resolved.
fn dominant_speaker(words: &[WordSpan]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in words {
        let Some(speaker) = word.speaker.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|(label, _)| *label == speaker) {
            Some((_, count)) => *count += 1,
            None => counts.push((speaker, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }

    best.map_or_else(|| UNKNOWN_SPEAKER.to_string(), |(label, _)| label.to_string())
}

fn flatten_words(segments: &[TranscriptSegment]) -> Vec<WordUtterance> {
    let mut utterances = Vec::new();

    for segment in segments {
        for word in &segment.words {
            let Some((start, end)) = word.timing() else {
                continue;
            };
            let speaker = word.speaker.as_deref().unwrap_or(UNKNOWN_SPEAKER);
            utterances.push(WordUtterance {
                start,
                end,
                text: format!("[{}]: {}", speaker, segment.span_text(word)),
            });
        }
    }

    tracing::debug!(utterance_count = utterances.len(), "words_flattened");
    utterances
}
