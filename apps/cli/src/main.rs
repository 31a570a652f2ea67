use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use stopkadr_core::{
    CaptionRecord, Config, OpencvSource, Progress, SampleFrame, SampleSummary, StopkadrError,
    download_video, extract_screenshots, extract_subtitles, resolve, video_path,
};

#[derive(Parser)]
#[command(name = "stopkadr")]
#[command(
    about = "Download a YouTube video, extract subtitles, and capture screenshots at a fixed interval"
)]
struct Cli {
    /// Video URL
    url: String,

    /// Subtitle language code (e.g., "en", "ru", "uk")
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Output folder for subtitles, the video file, and screenshots
    #[arg(short, long, default_value = "screenshots")]
    output: PathBuf,

    /// Seconds between captured screenshots
    #[arg(short, long, default_value_t = 5.0)]
    interval: f64,
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Counts caption records so the ✓ line can report how many were written.
#[derive(Default)]
struct CaptionCounter {
    written: AtomicUsize,
}

impl Progress for CaptionCounter {
    fn caption_written(&self, _record: &CaptionRecord) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }
}

/// Drives an indicatif bar from sampler progress, one tick per target frame.
struct FrameBar {
    bar: ProgressBar,
}

impl FrameBar {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan} {pos}/{len} frames")
                .unwrap(),
        );
        Self { bar }
    }
}

impl Progress for FrameBar {
    fn sampling_started(&self, total_targets: u64) {
        self.bar.set_length(total_targets);
    }

    fn frame_captured(&self, _frame: &SampleFrame) {
        self.bar.inc(1);
    }

    fn frame_failed(&self, frame_index: u64) {
        self.bar.println(format!(
            "{} Could not decode frame {}",
            style("!").yellow().bold(),
            frame_index
        ));
        self.bar.inc(1);
    }
}

fn sample_stage(
    video_file: &Path,
    config: &Config,
    progress: &dyn Progress,
) -> stopkadr_core::Result<SampleSummary> {
    let source = OpencvSource::open(video_file)?;
    extract_screenshots(
        source,
        config.interval_seconds,
        &config.output_folder,
        progress,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(cli.interval > 0.0) {
        eprintln!(
            "{} Screenshot interval must be positive",
            style("Error:").red().bold()
        );
        std::process::exit(1);
    }

    // Every stage embeds the id in its output names; bail before any I/O
    let Some(video_id) = resolve(&cli.url) else {
        eprintln!(
            "{} {}",
            style("Error:").red().bold(),
            StopkadrError::MissingVideoId {
                url: cli.url.clone()
            }
        );
        std::process::exit(1);
    };

    let config = Config {
        language: cli.lang,
        output_folder: cli.output,
        interval_seconds: cli.interval,
    };

    fs::create_dir_all(&config.output_folder).await?;

    println!(
        "\n{}  {}\n",
        style("stopkadr").cyan().bold(),
        style("Subtitle & Screenshot Extractor").dim()
    );

    let total_start = Instant::now();

    // Step 1: Subtitles (failure here never blocks the screenshot stage)
    let counter = CaptionCounter::default();
    let spinner = create_spinner(&format!("Fetching {} transcript...", config.language));
    match extract_subtitles(&video_id, &config.language, &config.output_folder, &counter).await {
        Ok(path) => spinner.finish_with_message(format!(
            "{} Subtitles saved: {} ({} captions)",
            style("✓").green().bold(),
            style(path.display()).dim(),
            counter.written.load(Ordering::Relaxed)
        )),
        Err(e) => spinner.finish_with_message(format!(
            "{} Subtitles skipped: {}",
            style("✗").red().bold(),
            e
        )),
    }

    // Step 2: Download
    let dest = video_path(&config.output_folder, &video_id);
    let spinner = create_spinner("Downloading video...");
    let video_file = match download_video(&cli.url, &dest).await {
        Ok(path) => {
            spinner.finish_with_message(format!(
                "{} Downloaded: {}",
                style("✓").green().bold(),
                style(path.display()).dim()
            ));
            Some(path)
        }
        Err(e) => {
            spinner.finish_with_message(format!(
                "{} Download failed: {}",
                style("✗").red().bold(),
                e
            ));
            None
        }
    };

    // Step 3: Screenshots (requires the downloaded file)
    if let Some(video_file) = video_file {
        println!(
            "{} Capturing a frame every {}s...",
            style("→").cyan().bold(),
            config.interval_seconds
        );
        let frame_bar = FrameBar::new();
        let result = sample_stage(&video_file, &config, &frame_bar);
        frame_bar.bar.finish_and_clear();
        match result {
            Ok(summary) if summary.failed == 0 => println!(
                "{} Saved {} screenshots",
                style("✓").green().bold(),
                summary.saved
            ),
            Ok(summary) => println!(
                "{} Saved {} screenshots, {} frames failed to decode",
                style("✓").green().bold(),
                summary.saved,
                summary.failed
            ),
            Err(e) => println!("{} Screenshots skipped: {}", style("✗").red().bold(), e),
        }
    }

    println!(
        "\n{} {}",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );

    Ok(())
}
