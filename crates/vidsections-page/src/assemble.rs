use crate::render::render_video_section;
use crate::split::DocumentSplit;
use vidsections_model::VideoRecord;

/// Build the regenerated content block: the opening container line, one
/// fragment per video (newest first), and the closing container line.
///
/// The sort is stable and descending on the 8-digit upload date, so
/// undated videos (key `00000000`) land last and equal dates keep their
/// fetch order. Indentation matches the surrounding page (8 spaces for
/// the container).
pub fn content_block(videos: &[VideoRecord], container_class: &str) -> String {
    let mut ordered: Vec<&VideoRecord> = videos.iter().collect();
    ordered.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));

    let sections: Vec<String> = ordered.iter().map(|v| render_video_section(v)).collect();

    format!(
        "        <div class=\"{container_class}\">\n{}\n        </div>",
        sections.join("\n")
    )
}

/// Assemble the complete document: preserved header, regenerated
/// content block, preserved footer. Pure given its inputs.
pub fn assemble(split: &DocumentSplit, videos: &[VideoRecord], container_class: &str) -> String {
    format!(
        "{}{}{}",
        split.header,
        content_block(videos, container_class),
        split.footer
    )
}
