//! Line-oriented console abstraction.
//!
//! Everything interactive talks to a [`Console`]. [`TextConsole`]
//! drives any reader/writer pair, which covers both the real terminal
//! ([`TextConsole::stdio`]) and in-memory buffers.

use std::io::{self, BufRead, Write};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Text input and output for the game.
pub trait Console {
    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Write `text` without a trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Block until the user acknowledges a message.
    fn wait_key(&mut self) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn wait_key(&mut self) -> io::Result<()> {
        (**self).wait_key()
    }
}

/// A [`Console`] over a buffered reader and a writer.
///
/// A terminal only delivers input a line at a time, so
/// [`wait_key`](Console::wait_key) consumes one line.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Wrap a reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TextConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        self.output.write_all(CLEAR_SEQUENCE.as_bytes())?;
        self.output.flush()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.write_all(b"\n")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn wait_key(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }
}
