use anyhow::Result;
use async_trait::async_trait;
use std::fs::DirEntry;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)?.filter_map(|e| e.ok()) {
                match stat_entry(&entry) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => {
                        tracing::debug!(path = %entry.path().display(), %err, "skipping entry");
                    }
                }
            }
            Ok(entries)
        })
        .await?
    }
}

/// Stat a listed child, following symlinks.
///
/// Fails when the child vanished or became inaccessible after listing, or is
/// a dangling link.
fn stat_entry(entry: &DirEntry) -> io::Result<FsEntry> {
    let path = entry.path();
    let metadata = std::fs::metadata(&path)?;

    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    let size = match kind {
        EntryKind::Directory => 0,
        EntryKind::File | EntryKind::Other => metadata.len(),
    };

    // Not every filesystem records birth time.
    let created: SystemTime = metadata
        .created()
        .or_else(|_| metadata.modified())
        .unwrap_or(UNIX_EPOCH);

    Ok(FsEntry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
        kind,
        size,
        created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stats_files_and_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("data.bin"), [0u8; 42]).unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();

        let mut entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "data.bin");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, 42);
        assert_eq!(entries[1].name, "nested");
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[1].size, 0);
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = RealFileSystem.read_dir(&temp.path().join("absent")).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn dangling_symlink_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("nowhere"), temp.path().join("dangling"))
            .unwrap();
        std::fs::write(temp.path().join("kept.txt"), "x").unwrap();

        let entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["kept.txt"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_directory_is_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("target")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("target"), temp.path().join("link")).unwrap();

        let entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        assert!(entries.iter().all(|e| e.kind == EntryKind::Directory));
        assert_eq!(entries.len(), 2);
    }
}
