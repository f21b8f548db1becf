use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::core::walk::DEFAULT_MAX_DEPTH;
use crate::core::{Charset, SortKey, WalkOptions};

#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(
    about = "Print a directory tree with per-directory file counts and save it as a text report",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Order of entries within each directory
    #[arg(short, long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Only write the report, do not print the tree
    #[arg(long)]
    pub no_console: bool,

    /// Directory to save the report in (defaults to the scanned directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Glyphs used to draw the tree
    #[arg(long, value_enum, default_value_t = Charset::Unicode)]
    pub charset: Charset,

    /// When to colour console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Maximum number of directory levels to descend into
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Ask for the directory, console output, sort order and destination
    #[arg(short, long)]
    pub interactive: bool,
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Everything a run needs, after flags and prompts are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: PathBuf,
    pub mirror_console: bool,
    pub sort_key: SortKey,
    /// `None` means "next to the scanned tree".
    pub destination: Option<PathBuf>,
}

impl Settings {
    pub fn destination(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.target)
    }
}

impl Cli {
    pub fn settings(&self, cwd: &Path) -> Settings {
        Settings {
            target: self.path.clone().unwrap_or_else(|| cwd.to_path_buf()),
            mirror_console: !self.no_console,
            sort_key: self.sort,
            destination: self.output_dir.clone(),
        }
    }

    pub fn walk_options(&self, sort_key: SortKey) -> WalkOptions {
        WalkOptions {
            sort_key,
            charset: self.charset,
            max_depth: self.max_depth,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scan_current_directory_into_itself() {
        let cli = Cli::parse_from(["filetree"]);
        let settings = cli.settings(Path::new("/work"));

        assert_eq!(settings.target, PathBuf::from("/work"));
        assert!(settings.mirror_console);
        assert_eq!(settings.sort_key, SortKey::Name);
        assert_eq!(settings.destination(), Path::new("/work"));
        assert_eq!(cli.walk_options(settings.sort_key).max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "filetree",
            "/data",
            "--sort",
            "ctime",
            "--no-console",
            "-o",
            "/reports",
            "--charset",
            "ascii",
            "--max-depth",
            "3",
        ]);
        let settings = cli.settings(Path::new("/work"));

        assert_eq!(settings.target, PathBuf::from("/data"));
        assert!(!settings.mirror_console);
        assert_eq!(settings.sort_key, SortKey::CreationTime);
        assert_eq!(settings.destination(), Path::new("/reports"));

        let options = cli.walk_options(SortKey::Size);
        assert_eq!(options.sort_key, SortKey::Size);
        assert_eq!(options.charset, Charset::Ascii);
        assert_eq!(options.max_depth, 3);
    }

    #[test]
    fn explicit_color_modes_ignore_environment() {
        assert!(should_use_color(ColorMode::Always));
        assert!(!should_use_color(ColorMode::Never));
    }
}
