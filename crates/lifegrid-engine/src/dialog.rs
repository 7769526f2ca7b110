//! Load and save prompts.
//!
//! Failures of the save itself are shown on the console and logged;
//! only console and listing failures are returned as errors.

use std::io;

use lifegrid_arena::ArenaModel;
use lifegrid_core::Console;
use lifegrid_save::{load, save, save_file_name, SaveStore};
use tracing::warn;

use crate::error::GameError;

const LOAD_QUERY: &str = "Do you want to load a game save? (Y/N): ";
const SAVE_QUERY: &str = "Do you want to save the game progress? (Y/N): ";
const CHOOSE_OPTION: &str = "Chosen option number: ";
const BAD_OPTION: &str = "Please choose an option number from the list! Press any key to continue.";
const LOAD_FAILED: &str = "Save loading error. Press any key to continue.";

/// Write `query` and read a yes/no answer.
///
/// Only `y`/`Y` counts as yes. Closed input counts as no.
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, query: &str) -> io::Result<bool> {
    console.write(query)?;
    Ok(console
        .read_line()?
        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
}

/// Offer to resume from one of the saves in `store`.
///
/// Returns `Ok(None)` when there are no saves, the user declines, or
/// the chosen save cannot be loaded.
pub fn ask_to_load<C, S>(console: &mut C, store: &S) -> Result<Option<ArenaModel>, GameError>
where
    C: Console + ?Sized,
    S: SaveStore + ?Sized,
{
    let names = store.list()?;
    if names.is_empty() {
        return Ok(None);
    }
    console.clear()?;
    if !ask_yes_no(console, LOAD_QUERY)? {
        return Ok(None);
    }

    let name = loop {
        for (i, name) in names.iter().enumerate() {
            console.write_line(&format!("({}): {}", i + 1, name))?;
        }
        console.write(CHOOSE_OPTION)?;
        let answer = console.read_line()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed at save choice")
        })?;
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=names.len()).contains(&n) => break &names[n - 1],
            _ => {
                console.write_line(BAD_OPTION)?;
                console.wait_key()?;
            }
        }
    };

    match load(store, name) {
        Ok(model) => Ok(Some(model)),
        Err(e) => {
            warn!(name = name.as_str(), error = %e, "failed to load save");
            console.write_line(LOAD_FAILED)?;
            console.wait_key()?;
            Ok(None)
        }
    }
}

/// Offer to save `model` under a user-chosen name.
///
/// Returns whether a save was written.
pub fn ask_to_save<C, S>(console: &mut C, store: &S, model: &ArenaModel) -> Result<bool, GameError>
where
    C: Console + ?Sized,
    S: SaveStore + ?Sized,
{
    if !ask_yes_no(console, SAVE_QUERY)? {
        return Ok(false);
    }
    console.write("Enter a file name: ")?;
    let stem = console.read_line()?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "input closed at file name")
    })?;
    let name = save_file_name(stem.trim());
    console.write_line("Saving...")?;
    match save(store, &name, model) {
        Ok(()) => Ok(true),
        Err(e) => {
            warn!(name = name.as_str(), error = %e, "failed to save");
            console.write_line(&format!("Saving error: {e}"))?;
            Ok(false)
        }
    }
}
