use serde::Deserialize;

use crate::{
    error::{Result, StopkadrError},
    types::TranscriptSegment,
};

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    utf8: Option<String>,
}

/// Fetch the transcript for one video in exactly one language.
///
/// There is no fallback across languages: absence of the requested track is
/// terminal for the caption stage.
pub async fn fetch_transcript(video_id: &str, language: &str) -> Result<Vec<TranscriptSegment>> {
    let response = reqwest::Client::new()
        .get(TIMEDTEXT_URL)
        .query(&[("v", video_id), ("lang", language), ("fmt", "json3")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(unavailable(video_id, language));
    }

    let body = response.text().await?;
    // The endpoint answers 200 with an empty body when no such track exists
    if body.trim().is_empty() {
        return Err(unavailable(video_id, language));
    }

    let timed_text: TimedText = serde_json::from_str(&body)?;
    let segments = parse_events(timed_text);
    if segments.is_empty() {
        return Err(unavailable(video_id, language));
    }

    Ok(segments)
}

fn unavailable(video_id: &str, language: &str) -> StopkadrError {
    StopkadrError::TranscriptUnavailable {
        video_id: video_id.to_string(),
        language: language.to_string(),
    }
}

fn parse_events(timed_text: TimedText) -> Vec<TranscriptSegment> {
    timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event
                .segs
                .iter()
                .filter_map(|seg| seg.utf8.as_deref())
                .collect();
            // Window-positioning events carry no segs; newline-only events
            // carry no speech
            let text = text.trim_end_matches('\n').to_string();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                start: event.start_ms? as f64 / 1000.0,
                duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
                text,
            })
        })
        .collect()
}
