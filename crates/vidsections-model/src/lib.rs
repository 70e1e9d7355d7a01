pub mod date;
pub mod video;

pub use date::*;
pub use video::*;
