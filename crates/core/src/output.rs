use std::path::{Path, PathBuf};

/// Path of the caption file for a video.
pub fn subtitles_path(output_folder: &Path, video_id: &str) -> PathBuf {
    output_folder.join(format!("subtitles_{}.srt", video_id))
}

/// Destination path for the downloaded video file.
pub fn video_path(output_folder: &Path, video_id: &str) -> PathBuf {
    output_folder.join(format!("{}.mp4", video_id))
}

/// Path of one screenshot, keyed by its timestamp. Two frame indices that
/// floor to the same second map to the same path and the later write wins.
pub fn screenshot_path(output_folder: &Path, timestamp_seconds: u64) -> PathBuf {
    output_folder.join(format!("screenshot_{}s.jpg", timestamp_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_embed_id_and_timestamp() {
        let folder = Path::new("screenshots");

        assert_eq!(
            subtitles_path(folder, "abc123"),
            PathBuf::from("screenshots/subtitles_abc123.srt")
        );
        assert_eq!(
            video_path(folder, "abc123"),
            PathBuf::from("screenshots/abc123.mp4")
        );
        assert_eq!(
            screenshot_path(folder, 15),
            PathBuf::from("screenshots/screenshot_15s.jpg")
        );
    }
}
