pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod prompt;
pub mod report;
pub mod sink;

pub use error::{ReportError, Result};
