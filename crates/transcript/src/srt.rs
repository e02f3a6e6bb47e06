//! SubRip rendering for the flattened word-utterance stream.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::WordUtterance;

/// Write numbered SubRip cues, one per utterance.
pub fn write_srt<W: Write>(out: &mut W, utterances: &[WordUtterance]) -> io::Result<()> {
    for (i, utterance) in utterances.iter().enumerate() {
        writeln!(out, "{}", i + 1)?;
        writeln!(
            out,
            "{} --> {}",
            format_timestamp(utterance.start),
            format_timestamp(utterance.end)
        )?;
        writeln!(out, "{}", utterance.text)?;
        writeln!(out)?;
    }

    Ok(())
}

pub fn save_srt(path: &Path, utterances: &[WordUtterance]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_srt(&mut file, utterances)?;
    file.flush()
}

/// `HH:MM:SS,mmm`. Negative inputs clamp to zero.
fn format_timestamp(seconds: f64) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1000;
    let millis = ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}
