pub mod ytdlp;

use thiserror::Error;

/// Failure modes of the video source, kept distinguishable from an
/// empty channel: a channel with zero videos is `Ok(vec![])`, never
/// one of these.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to launch yt-dlp (is it installed and on PATH?): {0}")]
    Spawn(#[source] std::io::Error),

    #[error("yt-dlp exited with {status}: {stderr}")]
    Failed { status: std::process::ExitStatus, stderr: String },

    #[error("yt-dlp produced non-UTF-8 output: {0}")]
    Output(#[from] std::string::FromUtf8Error),
}
