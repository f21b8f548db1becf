pub mod classify;
pub mod render;
pub mod walk;

pub use classify::classify;
pub use render::Charset;
pub use walk::{SortKey, WalkOptions, walk};
