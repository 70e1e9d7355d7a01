use vidsections_model::{format_upload_date, VideoRecord};

/// Escape the characters that would break the surrounding markup.
///
/// Order matters: `&` must be replaced first so the entities produced
/// for `<` and `>` are not double-escaped. Quotes and apostrophes pass
/// through verbatim; titles are only ever placed in element content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the HTML fragment for one video: escaped title, published
/// date, watch link, and an empty scripts-grid placeholder to be filled
/// in by hand later.
pub fn render_video_section(video: &VideoRecord) -> String {
    let title = escape_text(&video.title);
    let date = format_upload_date(video.upload_date.as_deref());
    let url = video.watch_url();

    format!(
        r#"            <!-- Video Section -->
            <div class="video-section">
                <h2 class="video-title">{title}</h2>
                <p class="video-date">Published: {date}</p>
                <a href="{url}" class="video-link" target="_blank">
                    ▶ Watch on YouTube
                </a>
                <div class="scripts-grid">
                    <!-- Add script files here -->
                </div>
            </div>"#
    )
}
