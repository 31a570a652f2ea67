use std::path::{Path, PathBuf};

use opencv::{
    core::{Mat, Vector},
    imgcodecs,
    prelude::*,
    videoio,
};

use crate::{
    error::{Result, StopkadrError},
    types::VideoMetadata,
};

/// A seekable, decodable video.
///
/// Opening is the constructor of the implementation; the decode cursor is
/// owned by the value and released when it is dropped, however many decode
/// failures happened in between.
pub trait VideoSource {
    fn metadata(&mut self) -> Result<VideoMetadata>;

    /// Seek the cursor to `frame_index` and attempt one decode, returning
    /// encoded image bytes on success.
    fn seek_and_read(&mut self, frame_index: u64) -> Result<Vec<u8>>;
}

/// OpenCV-backed source over a local video file. Frames are decoded with
/// `videoio::VideoCapture` and handed out jpeg-encoded.
pub struct OpencvSource {
    capture: videoio::VideoCapture,
    path: PathBuf,
}

impl OpencvSource {
    pub fn open(path: &Path) -> Result<Self> {
        // CAP_ANY lets OpenCV pick the platform backend
        let capture = videoio::VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)
            .map_err(|e| unavailable(path, &e.to_string()))?;

        let opened = capture
            .is_opened()
            .map_err(|e| unavailable(path, &e.to_string()))?;
        if !opened {
            return Err(unavailable(path, "could not open video file"));
        }

        Ok(Self {
            capture,
            path: path.to_path_buf(),
        })
    }
}

impl VideoSource for OpencvSource {
    fn metadata(&mut self) -> Result<VideoMetadata> {
        let fps = self
            .capture
            .get(videoio::CAP_PROP_FPS)
            .map_err(|e| unavailable(&self.path, &e.to_string()))?;
        let total_frames = self
            .capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .map_err(|e| unavailable(&self.path, &e.to_string()))?;

        Ok(VideoMetadata {
            fps,
            total_frames: total_frames.max(0.0) as u64,
        })
    }

    fn seek_and_read(&mut self, frame_index: u64) -> Result<Vec<u8>> {
        let decode_failed = || StopkadrError::FrameDecodeFailed { frame_index };

        self.capture
            .set(videoio::CAP_PROP_POS_FRAMES, frame_index as f64)
            .map_err(|_| decode_failed())?;

        let mut frame = Mat::default();
        let read = self
            .capture
            .read(&mut frame)
            .map_err(|_| decode_failed())?;
        if !read || frame.empty() {
            return Err(decode_failed());
        }

        let mut buf = Vector::<u8>::new();
        let params = Vector::<i32>::new();
        let encoded = imgcodecs::imencode(".jpg", &frame, &mut buf, &params)
            .map_err(|_| decode_failed())?;
        if !encoded {
            return Err(decode_failed());
        }

        Ok(buf.to_vec())
    }
}

fn unavailable(path: &Path, reason: &str) -> StopkadrError {
    StopkadrError::SourceUnavailable {
        reason: format!("{}: {}", path.display(), reason),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scripted in-memory source for sampler and pipeline tests.
    #[derive(Debug)]
    pub struct MockSource {
        metadata: VideoMetadata,
        fail_at: Vec<u64>,
    }

    impl MockSource {
        pub fn new(fps: f64, total_frames: u64) -> Self {
            Self {
                metadata: VideoMetadata { fps, total_frames },
                fail_at: Vec::new(),
            }
        }

        pub fn failing_at(mut self, indices: &[u64]) -> Self {
            self.fail_at = indices.to_vec();
            self
        }
    }

    impl VideoSource for MockSource {
        fn metadata(&mut self) -> Result<VideoMetadata> {
            Ok(self.metadata)
        }

        fn seek_and_read(&mut self, frame_index: u64) -> Result<Vec<u8>> {
            if self.fail_at.contains(&frame_index) {
                return Err(StopkadrError::FrameDecodeFailed { frame_index });
            }
            // Payload encodes the index so tests can tell frames apart
            Ok(vec![frame_index as u8, (frame_index >> 8) as u8])
        }
    }
}
