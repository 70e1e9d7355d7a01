use serde::{Deserialize, Serialize};

/// Sort key used for records with no usable upload date.
///
/// Lexicographically below every real `YYYYMMDD` string, so a descending
/// sort places undated videos last.
pub const MISSING_DATE_KEY: &str = "00000000";

/// One video as reported by the video source.
///
/// Created transiently per fetch; only `title`, `id`, and `upload_date`
/// feed rendering. `description` is carried for the saved listing but
/// unused by the page templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(default = "untitled")]
    pub title: String,
    /// Opaque platform identifier, expected unique per video.
    pub id: String,
    /// Upload date as an 8-digit `YYYYMMDD` string, when the source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn untitled() -> String {
    "Untitled".to_string()
}

impl VideoRecord {
    /// Canonical watch URL, derived deterministically from the id.
    pub fn watch_url(&self) -> String {
        format!("https://youtu.be/{}", self.id)
    }

    /// Sort key for newest-first ordering.
    ///
    /// Lexicographic comparison of `YYYYMMDD` strings is chronological for
    /// valid dates; absent or empty dates take [`MISSING_DATE_KEY`].
    pub fn sort_key(&self) -> &str {
        match self.upload_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => MISSING_DATE_KEY,
        }
    }
}

/// A saved fetch result: provenance plus the video records.
///
/// Written as pretty JSON by `vidsections fetch` and consumed by
/// `vidsections render`, so a page can be regenerated without re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub source: SourceInfo,
    pub videos: Vec<VideoRecord>,
}

/// Provenance information about the fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Channel handle or URL as given on the command line.
    pub channel: String,
    /// The videos-listing URL the collaborator was pointed at.
    pub url: String,
    pub fetched_at: String,
}
