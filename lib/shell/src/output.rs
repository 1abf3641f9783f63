//! Where command handlers write what the user sees.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// The role of a piece of output, mapped to a color on terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Directory,
    Size,
    Status,
    Success,
    Error,
}

impl Tone {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Plain => text.normal(),
            Self::Heading | Self::Directory => text.cyan(),
            Self::Size | Self::Status => text.yellow(),
            Self::Success => text.green(),
            Self::Error => text.red(),
        }
    }
}

/// A text sink supplied to every command.
///
/// Writing never fails from the caller's point of view; sinks backed by
/// real IO keep the first error and hand it out from [`Output::flush`].
pub trait Output {
    fn write(&mut self, text: &str, tone: Tone);

    fn line(&mut self, text: &str, tone: Tone) {
        self.write(text, tone);
        self.write("\n", Tone::Plain);
    }

    /// Clear whatever has been displayed so far.
    fn clear(&mut self);

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes to a terminal (or any writer), colored according to the
/// global `colored` override.
#[derive(Debug)]
pub struct TerminalOutput<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn write(&mut self, text: &str, tone: Tone) {
        if self.error.is_some() {
            return;
        }

        let result = write!(self.writer, "{}", tone.paint(text));
        self.record(result);
    }

    fn clear(&mut self) {
        if self.error.is_some() {
            return;
        }

        let result = self.writer.write_all(b"\x1b[2J\x1b[1;1H");
        self.record(result);
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.writer.flush()
    }
}

/// Collects plain, uncolored text.
#[derive(Debug, Default)]
pub struct BufferOutput {
    buffer: String,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Return everything written so far and start over.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl Output for BufferOutput {
    fn write(&mut self, text: &str, _tone: Tone) {
        self.buffer.push_str(text);
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }
}
