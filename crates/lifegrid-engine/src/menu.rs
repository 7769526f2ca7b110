//! Start-of-game dimension prompt.

use std::io;

use lifegrid_arena::Dimensions;
use lifegrid_core::Console;

/// Title shown above the dimension prompt.
pub const BANNER: &str = r"
  _    _  __                 _    _
 | |  (_)/ _| ___  __ _ _ __(_) __| |
 | |  | | |_ / _ \/ _` | '__| |/ _` |
 | |__| |  _|  __/ (_| | |  | | (_| |
 |____|_|_|  \___|\__, |_|  |_|\__,_|
                  |___/";

const INVALID_SIZE: &str =
    "Game arena sizes must be an integer no less than 3! Press any key to try again.";

const TOO_LARGE: &str = "Game arena is too large! Press any key to try again.";

/// Ask for arena length and height until both are integers of at least
/// [`Dimensions::MIN`] and together fit [`Dimensions::MAX_PADDED_CELLS`].
///
/// Each attempt clears the console and shows [`BANNER`]. Running out of
/// input is an [`io::ErrorKind::UnexpectedEof`] error.
pub fn prompt_dimensions<C: Console + ?Sized>(console: &mut C) -> io::Result<(usize, usize)> {
    loop {
        console.clear()?;
        console.write_line(BANNER)?;
        console.write("Enter the game arena length: ")?;
        let length = read_size(console)?;
        console.write("Enter the game arena height: ")?;
        let height = read_size(console)?;

        let message = match (length, height) {
            (Some(length), Some(height)) => match Dimensions::new(length, height) {
                Ok(_) => return Ok((length, height)),
                Err(_) => TOO_LARGE,
            },
            _ => INVALID_SIZE,
        };
        console.write_line(message)?;
        console.wait_key()?;
    }
}

fn read_size<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<usize>> {
    let line = console.read_line()?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "input closed at size prompt")
    })?;
    Ok(line
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= Dimensions::MIN))
}
