use regex::Regex;

/// Extract the video id from a reference string.
///
/// Captures the maximal run of `[A-Za-z0-9_-]` immediately after the first
/// `v=`. Returns `None` when no such marker exists; callers that need an id
/// must fail fast instead of working with a partial value.
pub fn resolve(url: &str) -> Option<String> {
    let re = Regex::new(r"v=([a-zA-Z0-9_-]+)").expect("video id pattern is valid");
    re.captures(url).map(|caps| caps[1].to_string())
}
