use crate::models::{Category, EntryKind};

/// Classify an entry by kind and file name.
///
/// Directories are always `Directory`, whatever their name looks like.
pub fn classify(name: &str, kind: EntryKind) -> Category {
    if kind == EntryKind::Directory {
        return Category::Directory;
    }

    match extension(name) {
        Some(ext) => category_for_extension(&ext.to_ascii_lowercase()),
        None => Category::Unknown,
    }
}

/// Extension of the final path component, leading `.` included.
///
/// Leading dots of the name do not start an extension, so `.bashrc` has none.
pub fn extension(name: &str) -> Option<&str> {
    let base = name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(name);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    let index = base[stem_start..].rfind('.')? + stem_start;
    Some(&base[index..])
}

fn category_for_extension(ext: &str) -> Category {
    match ext {
        ".txt" | ".doc" | ".docx" | ".pdf" | ".rtf" | ".md" | ".log" | ".odt" | ".tex" => {
            Category::Document
        }
        ".py" | ".java" | ".cpp" | ".c" | ".h" | ".hpp" | ".cs" | ".go" | ".rb" | ".rs"
        | ".kt" | ".swift" | ".sql" | ".js" | ".ts" | ".php" | ".html" | ".htm" | ".css"
        | ".scss" | ".sh" | ".bash" | ".zsh" | ".ps1" => Category::SourceCode,
        ".mp3" | ".wav" | ".flac" | ".aac" | ".ogg" | ".m4a" => Category::Audio,
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".bmp" | ".tiff" | ".svg" | ".webp" | ".ico" => {
            Category::Image
        }
        ".mp4" | ".mkv" | ".avi" | ".mov" | ".wmv" | ".flv" | ".webm" => Category::Video,
        ".zip" | ".rar" | ".7z" | ".tar" | ".gz" | ".bz2" | ".xz" => Category::Archive,
        ".exe" | ".bin" | ".app" | ".bat" | ".msi" => Category::Executable,
        ".xls" | ".xlsx" | ".csv" | ".ods" | ".ppt" | ".pptx" | ".odp" => {
            Category::SpreadsheetOrPresentation
        }
        ".json" | ".xml" | ".yaml" | ".yml" | ".toml" => Category::StructuredData,
        ".iso" | ".img" => Category::DiscImage,
        ".torrent" => Category::Torrent,
        ".db" | ".sqlite" | ".sqlite3" => Category::Database,
        _ => Category::Unknown,
    }
}
