use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use vidsections_model::{Listing, VideoRecord};
use vidsections_page::{assemble, content_block, output, split_document, DEFAULT_CONTAINER_CLASS};

#[derive(Parser)]
#[command(name = "vidsections")]
#[command(about = "Regenerate the video sections of a static HTML page from a channel listing")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a channel's video listing and save it as JSON
    Fetch {
        /// Channel handle (e.g., "@PyStructEng") or a full videos-page URL
        #[arg(short, long)]
        channel: String,

        /// Output path for the listing JSON
        #[arg(short, long, default_value = "listing.json")]
        output: PathBuf,
    },

    /// Splice a saved listing into a page (offline, no fetch)
    Render {
        /// Path to a listing JSON produced by `fetch`
        #[arg(short, long)]
        listing: PathBuf,

        #[command(flatten)]
        args: PageArgs,
    },

    /// Fetch a channel and splice its videos into a page in one step
    Generate {
        /// Channel handle (e.g., "@PyStructEng") or a full videos-page URL
        #[arg(short, long)]
        channel: String,

        #[command(flatten)]
        args: PageArgs,
    },
}

/// Arguments shared by the commands that touch the page.
#[derive(clap::Args)]
struct PageArgs {
    /// Path to the existing HTML page with the content container
    #[arg(short, long)]
    page: PathBuf,

    /// Side file for the full assembled document (default: "<page stem>-output.txt")
    #[arg(long)]
    review: Option<PathBuf>,

    /// Overwrite the page in place instead of previewing to stdout
    #[arg(long)]
    write: bool,

    /// Class of the container whose contents are regenerated
    #[arg(long, default_value = DEFAULT_CONTAINER_CLASS)]
    container_class: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Fetch { channel, output } => {
            tracing::info!(channel = %channel, "Fetching channel listing");
            let listing = vidsections_source::ytdlp::fetch_listing(&channel).await?;
            if listing.videos.is_empty() {
                tracing::warn!("Channel listing is empty");
            }
            let json = serde_json::to_string_pretty(&listing)?;
            std::fs::write(&output, &json)
                .with_context(|| format!("Failed to write listing {}", output.display()))?;
            tracing::info!(
                videos = listing.videos.len(),
                path = %output.display(),
                "Wrote listing JSON"
            );
        }
        Commands::Render { listing, args } => {
            tracing::info!(listing = %listing.display(), page = %args.page.display(), "Rendering from saved listing");
            let contents = std::fs::read_to_string(&listing)
                .with_context(|| format!("Failed to read listing {}", listing.display()))?;
            let saved: Listing = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse listing {}", listing.display()))?;
            splice_into_page(&saved.videos, &args)?;
        }
        Commands::Generate { channel, args } => {
            tracing::info!(channel = %channel, page = %args.page.display(), "Generating video sections");
            let videos = vidsections_source::ytdlp::list_channel(&channel).await?;
            splice_into_page(&videos, &args)?;
        }
    }

    Ok(())
}

/// Regenerate the page's content container from the given records.
///
/// Always writes the review side file; the page itself is only touched
/// in `--write` mode. Zero videos is a no-op: nothing is written and
/// the run still succeeds (a failed fetch errors out before this).
fn splice_into_page(videos: &[VideoRecord], args: &PageArgs) -> Result<()> {
    if videos.is_empty() {
        tracing::info!("No videos in listing — leaving the page untouched");
        return Ok(());
    }

    let html = output::read_page(&args.page)?;
    let split = split_document(&html, &args.container_class)
        .with_context(|| format!("Page {} has no usable structure", args.page.display()))?;

    let document = assemble(&split, videos, &args.container_class);

    let review = args
        .review
        .clone()
        .unwrap_or_else(|| default_review_path(&args.page));
    output::write_review_file(&review, &document)?;

    if args.write {
        output::write_page(&args.page, &document)?;
        tracing::info!(sections = videos.len(), "Committed regenerated page");
    } else {
        tracing::info!(
            sections = videos.len(),
            "Preview mode — page not modified (pass --write to commit)"
        );
        println!("{}", content_block(videos, &args.container_class));
    }

    Ok(())
}

/// Default review-file path: the page's stem with `-output.txt` appended,
/// next to the page itself.
fn default_review_path(page: &Path) -> PathBuf {
    let stem = page
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    page.with_file_name(format!("{stem}-output.txt"))
}
