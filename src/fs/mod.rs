mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, dir, file};

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `dir`, stat'ing each one.
    ///
    /// Fails only when `dir` itself cannot be listed. Children that cannot
    /// be stat'ed are left out of the result.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
