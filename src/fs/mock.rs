use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, UNIX_EPOCH};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

/// In-memory listings keyed by directory path. Unknown directories fail.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    listings: HashMap<PathBuf, std::result::Result<Vec<FsEntry>, String>>,
    listed: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn add_listing(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        self.with_state(|state| {
            state.listings.insert(dir.into(), Ok(entries));
        });
    }

    pub fn fail_listing(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.with_state(|state| {
            state.listings.insert(dir.into(), Err(message.into()));
        });
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.with_state(|state| state.listed.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.lock().expect("mock fs lock");
        f(&mut state)
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        self.with_state(|state| {
            state.listed.push(dir.to_path_buf());
            match state.listings.get(dir) {
                Some(Ok(entries)) => Ok(entries.clone()),
                Some(Err(message)) => Err(anyhow!("{message}")),
                None => Err(anyhow!("no listing for {}", dir.display())),
            }
        })
    }
}

/// File entry at `path`, created `created` seconds after the epoch.
pub fn file(path: &str, size: u64, created: u64) -> FsEntry {
    entry(path, EntryKind::File, size, created)
}

pub fn dir(path: &str, created: u64) -> FsEntry {
    entry(path, EntryKind::Directory, 0, created)
}

fn entry(path: &str, kind: EntryKind, size: u64, created: u64) -> FsEntry {
    let path = PathBuf::from(path);
    FsEntry {
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path,
        kind,
        size,
        created: UNIX_EPOCH + Duration::from_secs(created),
    }
}
