use std::path::Path;

use tokio::fs;

use crate::{
    error::{Result, StopkadrError},
    progress::Progress,
    types::{CaptionRecord, TranscriptSegment},
};

/// Derive indexed caption records from raw transcript segments, in input
/// order. No re-ordering, no merging of overlapping segments.
pub fn caption_records(
    segments: &[TranscriptSegment],
) -> impl Iterator<Item = CaptionRecord> + '_ {
    segments.iter().enumerate().map(|(i, segment)| CaptionRecord {
        index: i + 1,
        start: segment.start,
        end: segment.start + segment.duration,
        text: segment.text.clone(),
    })
}

fn format_record(record: &CaptionRecord) -> String {
    // Raw seconds with exactly three fractional digits, not the HH:MM:SS,mmm
    // caption clock. Existing consumers of these files expect this shape.
    format!(
        "{}\n{:.3} --> {:.3}\n{}\n\n",
        record.index, record.start, record.end, record.text
    )
}

/// Serialize segments into caption text.
///
/// Fails with `EmptyTranscript` on an empty input. Segment text passes
/// through verbatim; embedded newlines will produce malformed blocks and are
/// intentionally not sanitized away.
pub fn format_captions(segments: &[TranscriptSegment]) -> Result<String> {
    if segments.is_empty() {
        return Err(StopkadrError::EmptyTranscript);
    }

    Ok(caption_records(segments)
        .map(|record| format_record(&record))
        .collect())
}

/// Serialize segments and write the caption file in one pass, notifying the
/// progress sink once per record. An empty input fails before any I/O.
pub async fn write_captions(
    segments: &[TranscriptSegment],
    path: &Path,
    progress: &dyn Progress,
) -> Result<()> {
    if segments.is_empty() {
        return Err(StopkadrError::EmptyTranscript);
    }

    let mut text = String::new();
    for record in caption_records(segments) {
        text.push_str(&format_record(&record));
        progress.caption_written(&record);
    }

    fs::write(path, text).await?;
    Ok(())
}
