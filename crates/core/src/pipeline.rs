use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::{
    captions,
    error::{Result, StopkadrError},
    output,
    progress::Progress,
    sampler::FrameSampler,
    source::VideoSource,
    transcript,
};

/// Counts for one sampling run. Saved counts writes, not distinct files:
/// same-timestamp overwrites are accepted behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Download a video with yt-dlp to the exact destination path.
pub async fn download_video(url: &str, dest: &Path) -> Result<PathBuf> {
    let output = Command::new("yt-dlp")
        .arg(url)
        .arg("-f")
        .arg("best")
        .arg("-o")
        .arg(dest)
        .output()
        .await?;

    if !output.status.success() {
        return Err(StopkadrError::DownloadFailed {
            url: url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(dest.to_path_buf())
}

/// Fetch the transcript and write `subtitles_<id>.srt` for one video.
pub async fn extract_subtitles(
    video_id: &str,
    language: &str,
    output_folder: &Path,
    progress: &dyn Progress,
) -> Result<PathBuf> {
    let segments = transcript::fetch_transcript(video_id, language).await?;
    let path = output::subtitles_path(output_folder, video_id);
    captions::write_captions(&segments, &path, progress).await?;
    Ok(path)
}

/// Sample frames at a fixed interval and persist each success as a jpg keyed
/// by its timestamp. A frame that fails to decode is reported through the
/// sink and skipped; it never aborts the run.
pub fn extract_screenshots<S: VideoSource>(
    source: S,
    interval_seconds: f64,
    output_folder: &Path,
    progress: &dyn Progress,
) -> Result<SampleSummary> {
    let sampler = FrameSampler::new(source, interval_seconds)?;
    progress.sampling_started(sampler.target_count());

    let mut summary = SampleSummary::default();
    for sampled in sampler {
        match sampled {
            Ok(frame) => {
                let path = output::screenshot_path(output_folder, frame.timestamp_seconds);
                std::fs::write(&path, &frame.image)?;
                progress.frame_captured(&frame);
                summary.saved += 1;
            }
            Err(StopkadrError::FrameDecodeFailed { frame_index }) => {
                progress.frame_failed(frame_index);
                summary.failed += 1;
            }
            Err(other) => return Err(other),
        }
    }

    Ok(summary)
}
