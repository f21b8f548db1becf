use crate::models::Category;

/// Glyph set used to draw the tree scaffold and category annotations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Charset {
    /// Box-drawing connectors and emoji annotations
    #[default]
    Unicode,
    /// Plain ASCII connectors and bracketed labels
    Ascii,
}

impl Charset {
    fn middle(self) -> &'static str {
        match self {
            Charset::Unicode => "├── ",
            Charset::Ascii => "|-- ",
        }
    }

    fn last(self) -> &'static str {
        match self {
            Charset::Unicode => "└── ",
            Charset::Ascii => "`-- ",
        }
    }

    fn continuation(self) -> &'static str {
        match self {
            Charset::Unicode => "│   ",
            Charset::Ascii => "|   ",
        }
    }

    fn annotation(self, category: Category) -> &'static str {
        match self {
            Charset::Unicode => category.glyph(),
            Charset::Ascii => category.label(),
        }
    }
}

pub fn connector(is_last: bool, charset: Charset) -> &'static str {
    if is_last {
        charset.last()
    } else {
        charset.middle()
    }
}

/// Prefix handed down to the children of an entry.
///
/// A last child's descendants get a blank indent instead of a vertical bar.
pub fn child_prefix(prefix: &str, is_last: bool, charset: Charset) -> String {
    let indent = if is_last { "    " } else { charset.continuation() };
    format!("{prefix}{indent}")
}

pub fn count_suffix(files: u64) -> String {
    format!(" ({files} files)")
}

/// Render one entry line. `files` is `Some` for directories only.
pub fn entry_line(
    prefix: &str,
    is_last: bool,
    category: Category,
    name: &str,
    files: Option<u64>,
    charset: Charset,
) -> String {
    let mut line = format!(
        "{prefix}{}{} {name}",
        connector(is_last, charset),
        charset.annotation(category)
    );
    if let Some(files) = files {
        line.push_str(&count_suffix(files));
    }
    line
}

/// Error line for a directory that could not be listed, drawn as a final sibling.
pub fn error_line(prefix: &str, message: &str, charset: Charset) -> String {
    format!("{prefix}{}[error: {message}]", charset.last())
}
