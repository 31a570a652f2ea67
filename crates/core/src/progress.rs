use crate::types::{CaptionRecord, SampleFrame};

/// Injectable sink for per-unit progress reporting.
///
/// The pipeline calls it once per caption record and once per target frame,
/// so callers can count units instead of parsing console output.
pub trait Progress {
    fn caption_written(&self, _record: &CaptionRecord) {}

    /// A sampling run opened; `total_targets` frames will be visited.
    fn sampling_started(&self, _total_targets: u64) {}

    fn frame_captured(&self, _frame: &SampleFrame) {}

    fn frame_failed(&self, _frame_index: u64) {}
}

/// Sink that reports nothing.
pub struct NoProgress;

impl Progress for NoProgress {}
