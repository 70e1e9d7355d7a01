pub mod assemble;
pub mod output;
pub mod render;
pub mod split;

pub use assemble::{assemble, content_block};
pub use render::render_video_section;
pub use split::{split_document, DocumentSplit, SplitError};

/// Default class of the content container whose inner markup is
/// regenerated on every run.
pub const DEFAULT_CONTAINER_CLASS: &str = "content";
