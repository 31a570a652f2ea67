use std::path::PathBuf;

/// Run configuration, constructed once by the caller and passed into each
/// stage entry point. No component reads ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Transcript language code requested from the transcript source.
    pub language: String,
    /// Folder receiving the caption file, the video file and screenshots.
    pub output_folder: PathBuf,
    /// Wall-clock spacing between captured frames.
    pub interval_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            output_folder: PathBuf::from("screenshots"),
            interval_seconds: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.output_folder, PathBuf::from("screenshots"));
        assert_eq!(config.interval_seconds, 5.0);
    }
}
