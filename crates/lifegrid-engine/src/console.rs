//! Channel-fed console for interactive terminals.
//!
//! A terminal has one stdin, but the game needs it twice: prompts read
//! answers from it and a running game stops on Enter. [`spawn_line_reader`]
//! moves stdin onto its own thread and forwards every line over a
//! crossbeam channel. [`ChannelConsole`] reads prompt answers from one
//! clone of the receiver while [`Game::run`](crate::Game::run) watches
//! another for a stop.

use std::io::{self, BufRead, Write};
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use lifegrid_core::console::CLEAR_SEQUENCE;
use lifegrid_core::Console;
use tracing::debug;

/// Read `input` line by line on a new thread.
///
/// The channel disconnects once `input` reaches end of file or fails.
pub fn spawn_line_reader<R>(input: R) -> io::Result<Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("lifegrid-stdin".into())
        .spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("input closed");
        })?;
    Ok(rx)
}

/// A [`Console`] whose input arrives as lines on a channel.
#[derive(Debug)]
pub struct ChannelConsole<W> {
    lines: Receiver<String>,
    output: W,
}

impl<W: Write> ChannelConsole<W> {
    /// Read from `lines`, write to `output`.
    pub fn new(lines: Receiver<String>, output: W) -> Self {
        Self { lines, output }
    }

    /// The writer.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<W: Write> Console for ChannelConsole<W> {
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
        Ok(self
            .lines
            .recv()
            .ok()
            .map(|line| line.trim_end_matches('\r').to_string()))
    }

    fn wait_key(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_forwards_lines_then_disconnects() {
        let rx = spawn_line_reader(Cursor::new(b"a\nb\r\n".to_vec())).unwrap();
        let mut console = ChannelConsole::new(rx, Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn writes_reach_output() {
        let (_tx, rx) = unbounded();
        let mut console = ChannelConsole::new(rx, Vec::new());
        console.write("x").unwrap();
        console.write_line("y").unwrap();
        assert_eq!(console.output(), b"xy\n");
    }

    #[test]
    fn shared_receiver_serves_both_sides() {
        let (tx, rx) = unbounded();
        let stop = rx.clone();
        let mut console = ChannelConsole::new(rx, Vec::new());
        tx.send("5".to_string()).unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("5"));
        tx.send(String::new()).unwrap();
        assert_eq!(stop.try_recv().unwrap(), "");
    }
}
