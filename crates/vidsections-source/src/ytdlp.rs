use crate::SourceError;
use tokio::process::Command;
use vidsections_model::{Listing, SourceInfo, VideoRecord};

const YOUTUBE_BASE: &str = "https://www.youtube.com";

/// Build the channel videos-listing URL from a handle or full URL.
///
/// Accepts `@handle`, a bare handle (the `@` is added), or any
/// `http(s)` URL, which is passed through untouched.
pub fn channel_videos_url(channel: &str) -> String {
    if channel.starts_with("http://") || channel.starts_with("https://") {
        return channel.to_string();
    }
    let handle = channel.strip_prefix('@').unwrap_or(channel);
    format!("{YOUTUBE_BASE}/@{handle}/videos")
}

/// List a channel's videos through yt-dlp.
///
/// Runs `yt-dlp --dump-json` against the channel's videos page and parses
/// one record per stdout line. The subprocess blocks the run for its full
/// duration; there are no retries or timeouts.
///
/// A channel that genuinely has no videos returns `Ok(vec![])`. Launch
/// failures and hard yt-dlp failures are reported as [`SourceError`],
/// never collapsed into an empty result.
pub async fn list_channel(channel: &str) -> Result<Vec<VideoRecord>, SourceError> {
    let url = channel_videos_url(channel);
    tracing::info!(url = %url, "Fetching channel listing via yt-dlp");

    let output = Command::new("yt-dlp")
        .args(["--dump-json", "--no-warnings", "--ignore-errors", url.as_str()])
        .output()
        .await
        .map_err(SourceError::Spawn)?;

    let stdout = String::from_utf8(output.stdout)?;
    let videos = parse_listing(&stdout);

    if !output.status.success() {
        if videos.is_empty() {
            let stderr = stderr_excerpt(&output.stderr);
            return Err(SourceError::Failed { status: output.status, stderr });
        }
        // With --ignore-errors yt-dlp exits non-zero when individual
        // entries fail but still emits the rest.
        tracing::warn!(
            status = %output.status,
            videos = videos.len(),
            "yt-dlp reported errors; keeping the entries it emitted"
        );
    }

    tracing::info!(videos = videos.len(), "Parsed channel listing");
    Ok(videos)
}

/// Fetch a channel listing and wrap it with provenance for saving.
pub async fn fetch_listing(channel: &str) -> Result<Listing, SourceError> {
    let url = channel_videos_url(channel);
    let videos = list_channel(channel).await?;
    Ok(Listing {
        source: SourceInfo {
            channel: channel.to_string(),
            url,
            fetched_at: chrono::Utc::now().to_rfc3339(),
        },
        videos,
    })
}

/// Parse yt-dlp `--dump-json` output: one JSON object per line.
///
/// Lines that fail to parse or entries without an id are skipped with a
/// warning, matching yt-dlp's own null-entry behavior for unavailable
/// videos.
pub fn parse_listing(stdout: &str) -> Vec<VideoRecord> {
    let mut videos = Vec::new();

    for (lineno, line) in stdout.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<VideoRecord>(line) {
            Ok(video) if video.id.is_empty() => {
                tracing::warn!(line = lineno + 1, "Skipping entry with empty id");
            }
            Ok(video) => videos.push(video),
            Err(e) => {
                tracing::warn!(line = lineno + 1, error = %e, "Skipping unparseable listing line");
            }
        }
    }

    videos
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    // Keep the tail; yt-dlp prints the decisive error last
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(5);
    lines[start..].join("\n")
}
