//! End-to-end attribution over a multi-segment conversation.

use voxtag_attribution::assign_word_speakers;
use voxtag_diarization::{Diarizer, Result, SpeakerTurn};
use voxtag_transcript::{srt, TranscriptSegment, WordSpan};

/// Canned diarizer standing in for the external model.
struct FixedDiarizer {
    turns: Vec<SpeakerTurn>,
}

impl Diarizer for FixedDiarizer {
    fn diarize(
        &self,
        _audio_16k_mono: &[f32],
        _min_speakers: Option<u32>,
        _max_speakers: Option<u32>,
    ) -> Result<Vec<SpeakerTurn>> {
        Ok(self.turns.clone())
    }
}

fn timed(start: f64, end: f64, text_start: usize, text_end: usize) -> WordSpan {
    WordSpan::new(Some(start), Some(end), text_start, text_end)
}

fn conversation() -> Vec<TranscriptSegment> {
    vec![
        // Two speakers trading words within one segment.
        TranscriptSegment::new(
            0.0,
            4.0,
            "hello there friend",
            vec![timed(0.2, 0.8, 0, 5), timed(1.0, 1.6, 6, 11), timed(2.6, 3.4, 12, 18)],
        ),
        // A segment without word timing, attributed at segment granularity.
        TranscriptSegment::new(
            4.0,
            6.0,
            "mm hmm",
            vec![WordSpan::new(None, None, 0, 2), WordSpan::new(None, None, 3, 6)],
        ),
        // A segment past the end of the diarization table.
        TranscriptSegment::new(
            20.0,
            22.0,
            "goodbye",
            vec![timed(20.0, 21.5, 0, 7)],
        ),
    ]
}

#[test]
fn test_conversation_attribution() {
    let diarizer = FixedDiarizer {
        turns: vec![
            SpeakerTurn::new(0.0, 2.5, "SPEAKER_00"),
            SpeakerTurn::new(2.5, 6.0, "SPEAKER_01"),
        ],
    };
    let turns = diarizer.diarize(&[], None, None).unwrap();

    let mut segments = conversation();
    let utterances = assign_word_speakers(&turns, &mut segments, false);

    // First segment: two words for SPEAKER_00, one for SPEAKER_01.
    assert_eq!(segments[0].speaker.as_deref(), Some("SPEAKER_00"));
    assert_eq!(segments[0].words[2].speaker.as_deref(), Some("SPEAKER_01"));

    // Untimed words inherited the segment interval inside SPEAKER_01's turn.
    assert_eq!(segments[1].speaker.as_deref(), Some("SPEAKER_01"));

    // No turn reaches the last segment in strict mode.
    assert_eq!(segments[2].speaker.as_deref(), Some("UNKNOWN"));
    assert_eq!(segments[2].words[0].speaker, None);

    let texts: Vec<&str> = utterances.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "[SPEAKER_00]: hello",
            "[SPEAKER_00]: there",
            "[SPEAKER_01]: friend",
            "[SPEAKER_01]: mm",
            "[SPEAKER_01]: hmm",
            "[UNKNOWN]: goodbye",
        ]
    );
}

#[test]
fn test_fill_nearest_covers_every_timed_word() {
    let turns = vec![
        SpeakerTurn::new(0.0, 2.5, "SPEAKER_00"),
        SpeakerTurn::new(2.5, 6.0, "SPEAKER_01"),
    ];

    let mut segments = conversation();
    assign_word_speakers(&turns, &mut segments, true);

    // The out-of-range segment now falls back to the nearest turn.
    assert_eq!(segments[2].speaker.as_deref(), Some("SPEAKER_01"));
    for segment in &segments {
        for word in &segment.words {
            assert!(word.speaker.is_some());
        }
    }
}

#[test]
fn test_attribution_is_deterministic() {
    let turns = vec![
        SpeakerTurn::new(0.0, 2.5, "SPEAKER_00"),
        SpeakerTurn::new(2.5, 6.0, "SPEAKER_01"),
    ];

    let mut first = conversation();
    let first_utterances = assign_word_speakers(&turns, &mut first, false);
    let mut second = conversation();
    let second_utterances = assign_word_speakers(&turns, &mut second, false);

    assert_eq!(first, second);
    assert_eq!(first_utterances, second_utterances);
}

#[test]
fn test_srt_rendering_of_flattened_words() {
    let turns = vec![SpeakerTurn::new(0.0, 4.0, "SPEAKER_00")];

    let mut segments = vec![TranscriptSegment::new(
        0.0,
        4.0,
        "hello there",
        vec![timed(0.2, 0.8, 0, 5), timed(1.0, 1.6, 6, 11)],
    )];
    let utterances = assign_word_speakers(&turns, &mut segments, false);

    let mut buf = Vec::new();
    srt::write_srt(&mut buf, &utterances).unwrap();
    let rendered = String::from_utf8(buf).unwrap();

    assert!(rendered.starts_with("1\n00:00:00,200 --> 00:00:00,800\n[SPEAKER_00]: hello\n"));
    assert!(rendered.contains("2\n00:00:01,000 --> 00:00:01,600\n[SPEAKER_00]: there\n"));
}
