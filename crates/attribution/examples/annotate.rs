//! Example: Attribute speakers on a small hard-coded transcript.
//!
//! Run with: cargo run -p voxtag-attribution --example annotate

use voxtag_attribution::assign_word_speakers;
use voxtag_diarization::SpeakerTurn;
use voxtag_transcript::{srt, TranscriptSegment, WordSpan};

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("voxtag_attribution=trace")
        .init();

    let turns = vec![
        SpeakerTurn::new(0.0, 5.0, "SPEAKER_00"),
        SpeakerTurn::new(5.0, 10.0, "SPEAKER_01"),
    ];

    let mut segments = vec![TranscriptSegment::new(
        0.0,
        10.0,
        "hi bye",
        vec![
            WordSpan::new(Some(0.0), Some(2.0), 0, 2),
            WordSpan::new(Some(6.0), Some(8.0), 3, 6),
        ],
    )];

    let utterances = assign_word_speakers(&turns, &mut segments, false);

    for segment in &segments {
        println!(
            "segment {:.1}-{:.1} [{}]: {}",
            segment.start,
            segment.end,
            segment.speaker.as_deref().unwrap_or("?"),
            segment.text
        );
    }

    println!();
    let mut stdout = std::io::stdout();
    srt::write_srt(&mut stdout, &utterances).expect("write SRT to stdout");
}
