use std::io;
use std::path::Path;

use crate::core::classify::classify;
use crate::core::render::{self, Charset};
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry};
use crate::sink::{LineStyle, Sinks};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Ordering applied to the children of every listed directory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum SortKey {
    /// Case-insensitive name, ascending
    #[default]
    Name,
    /// Creation time, newest first
    #[value(name = "ctime")]
    CreationTime,
    /// Size, largest first (directories count as empty)
    Size,
}

/// Configuration options for directory traversal.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub sort_key: SortKey,
    pub charset: Charset,
    /// Number of directory levels that may be listed, the root included.
    /// Guards against symlink loops and pathologically deep trees.
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Name,
            charset: Charset::Unicode,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Walk `dir`, emitting one line per entry to `sinks`, and return the number
/// of files found in the whole subtree.
///
/// A directory that cannot be listed yields a single error line and counts
/// as 0; its ancestors carry on with their remaining entries. Only sink
/// write failures are returned as errors.
pub async fn walk<F: FileSystem>(
    fs: &F,
    dir: &Path,
    prefix: &str,
    sinks: &mut Sinks<'_>,
    options: &WalkOptions,
) -> io::Result<u64> {
    walk_internal(fs, dir, prefix, sinks, options, 0).await
}

async fn walk_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    prefix: &str,
    sinks: &mut Sinks<'_>,
    options: &WalkOptions,
    depth: usize,
) -> io::Result<u64> {
    if depth >= options.max_depth {
        tracing::warn!(dir = %dir.display(), max_depth = options.max_depth, "depth limit reached");
        let message = format!("depth limit of {} reached", options.max_depth);
        sinks.emit(
            LineStyle::Error,
            &render::error_line(prefix, &message, options.charset),
        )?;
        return Ok(0);
    }

    let mut entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "cannot list directory");
            sinks.emit(
                LineStyle::Error,
                &render::error_line(prefix, &err.to_string(), options.charset),
            )?;
            return Ok(0);
        }
    };

    sort_entries(&mut entries, options.sort_key);
    tracing::trace!(dir = %dir.display(), entries = entries.len(), "listed");

    let mut total_files = 0;
    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;

        let files = match entry.kind {
            EntryKind::File => {
                total_files += 1;
                None
            }
            EntryKind::Other => None,
            EntryKind::Directory => {
                let child_prefix = render::child_prefix(prefix, is_last, options.charset);
                let files = Box::pin(walk_internal(
                    fs,
                    &entry.path,
                    &child_prefix,
                    sinks,
                    options,
                    depth + 1,
                ))
                .await?;
                total_files += files;
                Some(files)
            }
        };

        let line = render::entry_line(
            prefix,
            is_last,
            classify(&entry.name, entry.kind),
            &entry.name,
            files,
            options.charset,
        );
        sinks.emit(LineStyle::Entry, &line)?;
    }

    Ok(total_files)
}

/// Sort one directory's entries in place.
///
/// Entries are first ordered by raw name so that equal keys keep a
/// deterministic order; every key sort after that is stable.
pub fn sort_entries(entries: &mut [FsEntry], key: SortKey) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    match key {
        SortKey::Name => entries.sort_by_cached_key(|entry| entry.name.to_lowercase()),
        SortKey::CreationTime => entries.sort_by(|a, b| b.created.cmp(&a.created)),
        SortKey::Size => entries.sort_by_key(|entry| std::cmp::Reverse(sort_size(entry))),
    }
}

fn sort_size(entry: &FsEntry) -> u64 {
    if entry.is_dir() { 0 } else { entry.size }
}
