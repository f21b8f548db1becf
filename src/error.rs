use std::{io, path::PathBuf};

/// Fatal errors: any of these stops the run before a report is persisted.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("path '{}' does not exist", .0.display())]
    TargetMissing(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    TargetNotDirectory(PathBuf),

    #[error("cannot access '{}'", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("destination '{}' does not exist or is not a directory", .0.display())]
    DestinationInvalid(PathBuf),

    #[error("failed to write report {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
