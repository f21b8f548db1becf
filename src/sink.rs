//! Line consumers for rendered output.
//!
//! Every sink receives exactly the same text in the same order; only the
//! console sink uses the style to pick a colour.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineStyle {
    Header,
    Entry,
    Error,
    Summary,
}

pub trait LineSink {
    fn emit(&mut self, style: LineStyle, text: &str) -> io::Result<()>;
}

/// Styled console output on stdout.
pub struct ConsoleSink {
    stdout: StandardStream,
}

impl ConsoleSink {
    /// `use_color` is the already-resolved decision; termcolor must not
    /// second-guess it from `TERM` or `NO_COLOR`.
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl LineSink for ConsoleSink {
    fn emit(&mut self, style: LineStyle, text: &str) -> io::Result<()> {
        let color = match style {
            LineStyle::Header | LineStyle::Summary => Color::Cyan,
            LineStyle::Entry => Color::White,
            LineStyle::Error => Color::Red,
        };
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.stdout, "{text}")?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

/// Plain text sink over any writer; the report file uses this.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, _style: LineStyle, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")
    }
}

/// Fan-out over zero or more sinks, in registration order.
#[derive(Default)]
pub struct Sinks<'a> {
    sinks: Vec<&'a mut dyn LineSink>,
}

impl<'a> Sinks<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: &'a mut dyn LineSink) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn emit(&mut self, style: LineStyle, text: &str) -> io::Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.emit(style, text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sink_gets_every_line_in_order() {
        let mut first = WriterSink::new(Vec::new());
        let mut second = WriterSink::new(Vec::new());

        {
            let mut sinks = Sinks::new();
            sinks.push(&mut first);
            sinks.push(&mut second);
            assert_eq!(sinks.len(), 2);

            sinks.emit(LineStyle::Header, "header").unwrap();
            sinks.emit(LineStyle::Error, "oops").unwrap();
        }

        let first = String::from_utf8(first.into_inner()).unwrap();
        let second = String::from_utf8(second.into_inner()).unwrap();
        assert_eq!(first, "header\noops\n");
        assert_eq!(first, second);
    }

    #[test]
    fn no_sinks_is_a_no_op() {
        let mut sinks = Sinks::new();
        assert!(sinks.is_empty());
        sinks.emit(LineStyle::Entry, "ignored").unwrap();
    }
}
