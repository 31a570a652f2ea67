use thiserror::Error;

#[derive(Error, Debug)]
pub enum StopkadrError {
    #[error("Could not extract a video id from {url}")]
    MissingVideoId { url: String },

    #[error("Transcript contains no segments")]
    EmptyTranscript,

    #[error("No {language} transcript available for video {video_id}")]
    TranscriptUnavailable { video_id: String, language: String },

    #[error("Download failed for {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Video source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    #[error("Failed to decode frame {frame_index}")]
    FrameDecodeFailed { frame_index: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StopkadrError>;
