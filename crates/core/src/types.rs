use serde::{Deserialize, Serialize};

/// One raw timed speech unit as delivered by the transcript source.
/// Segments arrive in temporal order; this crate never re-sorts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

/// One formatted caption block derived 1:1 from a transcript segment.
/// Indices are 1-based and contiguous in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionRecord {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Decode properties read once when a sampling run opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMetadata {
    pub fps: f64,
    pub total_frames: u64,
}

/// One captured frame plus its computed timestamp. Created, persisted and
/// dropped per frame; the sampler never buffers these as a collection.
#[derive(Debug, Clone)]
pub struct SampleFrame {
    pub frame_index: u64,
    pub timestamp_seconds: u64,
    pub image: Vec<u8>,
}
