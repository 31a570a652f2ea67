//! Stopkadr Core Library
//!
//! Core functionality for resolving a YouTube video id, turning its
//! transcript into a timed caption file, and capturing screenshots at a
//! fixed interval from the downloaded video.

pub mod captions;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod resolver;
pub mod sampler;
pub mod source;
pub mod transcript;
pub mod types;

// Re-export commonly used items at crate root
pub use captions::{caption_records, format_captions, write_captions};
pub use config::Config;
pub use error::{Result, StopkadrError};
pub use output::{screenshot_path, subtitles_path, video_path};
pub use pipeline::{SampleSummary, download_video, extract_screenshots, extract_subtitles};
pub use progress::{NoProgress, Progress};
pub use resolver::resolve;
pub use sampler::{FrameSampler, frame_step};
pub use source::{OpencvSource, VideoSource};
pub use transcript::fetch_transcript;
pub use types::{CaptionRecord, SampleFrame, TranscriptSegment, VideoMetadata};
