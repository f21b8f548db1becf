use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, FIFOs, devices. Rendered but never counted as files.
    Other,
}

/// One child of a listed directory, stat'ed at listing time.
///
/// Symbolic links are resolved, so a link to a directory is a `Directory`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes; always 0 for directories.
    pub size: u64,
    pub created: SystemTime,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
