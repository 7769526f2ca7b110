//! Test utilities and mock types for lifegrid development.
//!
//! Provides a scripted [`Console`] that records everything written to
//! it, an in-memory [`SaveStore`], and the standard patterns in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{seeded_arena, BLINKER_SEED, BLOCK_SEED, GLIDER_SEED};

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::io;

use lifegrid_core::Console;
use lifegrid_save::{SaveError, SaveStore};

/// Mock implementation of [`Console`].
///
/// Reads come from a fixed script; running past its end reads as
/// closed input. Every call is counted and all written text is kept
/// for assertions. [`wait_key`](Console::wait_key) never consumes
/// script lines.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    clears: usize,
    writes: usize,
    write_lines: usize,
    reads: usize,
    wait_keys: usize,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Everything written so far, with `write_line` newlines.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Script lines not yet read.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn clear_calls(&self) -> usize {
        self.clears
    }

    pub fn write_calls(&self) -> usize {
        self.writes
    }

    pub fn write_line_calls(&self) -> usize {
        self.write_lines
    }

    pub fn read_line_calls(&self) -> usize {
        self.reads
    }

    pub fn wait_key_calls(&self) -> usize {
        self.wait_keys
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes += 1;
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_lines += 1;
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        Ok(self.input.pop_front())
    }

    fn wait_key(&mut self) -> io::Result<()> {
        self.wait_keys += 1;
        Ok(())
    }
}

/// Mock implementation of [`SaveStore`].
///
/// Backed by a `BTreeMap<String, String>` so listings come out sorted
/// like a directory store's.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saves: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a save.
    pub fn insert(&self, name: &str, contents: impl Into<String>) {
        self.saves
            .borrow_mut()
            .insert(name.to_string(), contents.into());
    }

    /// Read back a save for test assertions.
    pub fn get(&self, name: &str) -> Option<String> {
        self.saves.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.borrow().is_empty()
    }
}

impl SaveStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, SaveError> {
        Ok(self.saves.borrow().keys().cloned().collect())
    }

    fn read(&self, name: &str) -> Result<String, SaveError> {
        self.get(name).ok_or_else(|| SaveError::NotFound {
            name: name.to_string(),
        })
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), SaveError> {
        self.insert(name, contents);
        Ok(())
    }
}
