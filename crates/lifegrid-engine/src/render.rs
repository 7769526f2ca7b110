//! Text rendering of arenas.

use std::io;

use lifegrid_arena::ArenaModel;
use lifegrid_core::{Cell, CellState, Console};

use crate::config::GameConfig;

/// Draws arenas as rows of glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    live_glyph: String,
    dead_glyph: String,
    clear_each_frame: bool,
}

impl TextRenderer {
    /// Renderer using the given glyphs. Frames clear the console first.
    pub fn new(live_glyph: impl Into<String>, dead_glyph: impl Into<String>) -> Self {
        Self {
            live_glyph: live_glyph.into(),
            dead_glyph: dead_glyph.into(),
            clear_each_frame: true,
        }
    }

    /// Renderer matching the glyph and clearing settings of `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.live_glyph.as_str(), config.dead_glyph.as_str())
            .with_clear(config.clear_each_frame)
    }

    /// Set whether [`visualize`](Self::visualize) clears the console.
    pub fn with_clear(mut self, clear_each_frame: bool) -> Self {
        self.clear_each_frame = clear_each_frame;
        self
    }

    /// Glyph for `state`.
    pub fn glyph(&self, state: CellState) -> &str {
        match state {
            CellState::Live => &self.live_glyph,
            CellState::Dead => &self.dead_glyph,
        }
    }

    /// One glyph per cell, broken into rows of `length` glyphs.
    ///
    /// Rows are separated by `\n` with no trailing newline.
    pub fn render_grid<'a, I>(&self, cells: I, length: usize) -> String
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut out = String::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if length > 0 && i > 0 && i % length == 0 {
                out.push('\n');
            }
            out.push_str(self.glyph(cell.state));
        }
        out
    }

    /// Draw one frame: size line, optional info block, then the grid.
    pub fn visualize<'a, C, I>(
        &self,
        console: &mut C,
        cells: I,
        length: usize,
        height: usize,
        info: Option<&str>,
    ) -> io::Result<()>
    where
        C: Console + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        if self.clear_each_frame {
            console.clear()?;
        }
        console.write_line(&format!("Field size: {length} x {height}"))?;
        if let Some(info) = info {
            console.write_line(info)?;
        }
        console.write_line(&self.render_grid(cells, length))
    }

    /// [`visualize`](Self::visualize) a model with its [`status_text`].
    pub fn draw_model<C: Console + ?Sized>(
        &self,
        console: &mut C,
        model: &ArenaModel,
        stop_hint: &str,
    ) -> io::Result<()> {
        let status = status_text(model, stop_hint);
        self.visualize(
            console,
            model.active_cells(),
            model.length(),
            model.height(),
            Some(&status),
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Generation, live count and `stop_hint`, one per line.
pub fn status_text(model: &ArenaModel, stop_hint: &str) -> String {
    let mut text = format!(
        "Generation: ({})\nLive cell count: {}",
        model.generation(),
        model.live_count()
    );
    if !stop_hint.is_empty() {
        text.push('\n');
        text.push_str(stop_hint);
    }
    text
}
