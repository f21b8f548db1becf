mod category;
mod entry;

pub use category::Category;
pub use entry::{EntryKind, FsEntry};
