/// Display category of a tree entry, derived from its kind and extension.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Directory,
    Document,
    SourceCode,
    Audio,
    Image,
    Video,
    Archive,
    Executable,
    SpreadsheetOrPresentation,
    StructuredData,
    DiscImage,
    Torrent,
    Database,
    Unknown,
}

impl Category {
    /// Emoji annotation used with the Unicode charset.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Directory => "📂",
            Category::Document => "📄",
            Category::SourceCode => "💻",
            Category::Audio => "🎵",
            Category::Image => "🖼️",
            Category::Video => "🎥",
            Category::Archive => "🗃️",
            Category::Executable => "⚙️",
            Category::SpreadsheetOrPresentation => "📊",
            Category::StructuredData => "📋",
            Category::DiscImage => "💿",
            Category::Torrent => "🌊",
            Category::Database => "🗄️",
            Category::Unknown => "📜",
        }
    }

    /// Short bracketed label used with the ASCII charset.
    pub fn label(self) -> &'static str {
        match self {
            Category::Directory => "[dir]",
            Category::Document => "[doc]",
            Category::SourceCode => "[src]",
            Category::Audio => "[aud]",
            Category::Image => "[img]",
            Category::Video => "[vid]",
            Category::Archive => "[arc]",
            Category::Executable => "[exe]",
            Category::SpreadsheetOrPresentation => "[tab]",
            Category::StructuredData => "[dat]",
            Category::DiscImage => "[iso]",
            Category::Torrent => "[tor]",
            Category::Database => "[db]",
            Category::Unknown => "[---]",
        }
    }
}
