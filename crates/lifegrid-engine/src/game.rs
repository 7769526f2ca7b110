//! The interactive game loop.
//!
//! [`Game`] owns a console, a save store and (once started) a
//! [`CellArena`]. [`Game::start`] either resumes a save or prompts for a
//! new arena; [`Game::run`] then advances and redraws one generation per
//! tick until a stop signal arrives.

use crossbeam_channel::{Receiver, RecvTimeoutError};
use lifegrid_arena::CellArena;
use lifegrid_core::{Console, Generation};
use lifegrid_save::SaveStore;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dialog;
use crate::error::GameError;
use crate::menu;
use crate::render::TextRenderer;
use crate::seeds::SeedGenerator;

/// Outcome of one [`Game::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations advanced during this run.
    pub generations: u64,
    /// Arena generation when the run ended.
    pub final_generation: Generation,
    /// Live cells when the run ended.
    pub live_cells: usize,
    /// Whether the arena was saved afterwards.
    pub saved: bool,
}

/// A game of life played on a console.
pub struct Game<C, S> {
    config: GameConfig,
    console: C,
    store: S,
    renderer: TextRenderer,
    seeds: SeedGenerator,
    arena: Option<CellArena>,
    resumed: bool,
}

impl<C: Console, S: SaveStore> Game<C, S> {
    /// Validate `config` and set up a game that has not started yet.
    pub fn new(config: GameConfig, console: C, store: S) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            renderer: TextRenderer::from_config(&config),
            seeds: SeedGenerator::from_option(config.rng_seed),
            config,
            console,
            store,
            arena: None,
            resumed: false,
        })
    }

    /// Resume a save or create a freshly seeded arena.
    ///
    /// With save prompts enabled the user is first offered the saves in
    /// the store; a resumed arena is drawn immediately. Otherwise the
    /// configured dimensions are used, or prompted for, and the arena is
    /// seeded from the configured seed or a random one.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.config.save_prompts {
            if let Some(model) = dialog::ask_to_load(&mut self.console, &self.store)? {
                let arena = CellArena::from_model(model)?;
                info!(
                    length = arena.model().length(),
                    height = arena.model().height(),
                    generation = arena.model().iteration_count(),
                    "resumed game"
                );
                self.arena = Some(arena);
                self.resumed = true;
                return self.render();
            }
        }

        let (length, height) = match self.config.dimensions() {
            Some(dims) => dims,
            None => menu::prompt_dimensions(&mut self.console)?,
        };
        let mut arena = CellArena::new(length, height)?;
        let seed = match &self.config.initial_seed {
            Some(seed) => seed.clone(),
            None => self.seeds.generate(length * height)?,
        };
        arena.initialize_with_seed(&seed)?;
        info!(length, height, live = arena.live_count(), "started new game");
        self.arena = Some(arena);
        self.resumed = false;
        Ok(())
    }

    /// Advance one generation and redraw.
    pub fn step(&mut self) -> Result<(), GameError> {
        let arena = self.arena.as_mut().ok_or(GameError::NotStarted)?;
        arena.update();
        debug!(
            generation = arena.model().iteration_count(),
            live = arena.live_count(),
            "advanced"
        );
        self.render()
    }

    /// Step once per tick until `stop` fires, then offer to save.
    ///
    /// Any message on `stop` ends the run. It also ends when `stop` is disconnected or after
    /// `max_generations` steps. A resumed arena stays on screen for
    /// one tick before the first step.
    pub fn run<T>(&mut self, stop: &Receiver<T>) -> Result<RunSummary, GameError> {
        if self.arena.is_none() {
            return Err(GameError::NotStarted);
        }

        let mut generations = 0u64;
        let mut stopped = std::mem::take(&mut self.resumed) && self.wait_for_stop(stop);
        while !stopped {
            if self
                .config
                .max_generations
                .is_some_and(|limit| generations >= limit)
            {
                break;
            }
            self.step()?;
            generations += 1;
            stopped = self.wait_for_stop(stop);
        }

        let arena = self.arena.as_ref().ok_or(GameError::NotStarted)?;
        let saved = if self.config.save_prompts {
            dialog::ask_to_save(&mut self.console, &self.store, arena.model())?
        } else {
            false
        };
        let summary = RunSummary {
            generations,
            final_generation: arena.generation(),
            live_cells: arena.live_count(),
            saved,
        };
        info!(
            generations,
            final_generation = summary.final_generation.0,
            live = summary.live_cells,
            saved,
            "game stopped"
        );
        Ok(summary)
    }

    /// The arena, once started.
    pub fn arena(&self) -> Option<&CellArena> {
        self.arena.as_ref()
    }

    /// The configuration in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The save store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the console and store.
    pub fn into_parts(self) -> (C, S) {
        (self.console, self.store)
    }

    fn render(&mut self) -> Result<(), GameError> {
        let arena = self.arena.as_ref().ok_or(GameError::NotStarted)?;
        self.renderer
            .draw_model(&mut self.console, arena.model(), &self.config.stop_hint)?;
        Ok(())
    }

    /// Sleep one tick. `true` when the run should end.
    fn wait_for_stop<T>(&self, stop: &Receiver<T>) -> bool {
        match stop.recv_timeout(self.config.tick_interval) {
            Ok(_) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossbeam_channel::unbounded;
    use lifegrid_save::to_json;
    use lifegrid_test_utils::{MemoryStore, ScriptedConsole, BLINKER_SEED};

    fn headless(seed: &str, max_generations: u64) -> GameConfig {
        GameConfig {
            length: Some(3),
            height: Some(3),
            initial_seed: Some(seed.to_string()),
            tick_interval: Duration::ZERO,
            max_generations: Some(max_generations),
            save_prompts: false,
            ..GameConfig::default()
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = GameConfig {
            length: Some(3),
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(cfg, ScriptedConsole::new(&[]), MemoryStore::new()),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn step_before_start_fails() {
        let mut game = Game::new(
            headless(BLINKER_SEED, 1),
            ScriptedConsole::new(&[]),
            MemoryStore::new(),
        )
        .unwrap();
        assert!(matches!(game.step(), Err(GameError::NotStarted)));
        let (_tx, rx) = unbounded::<()>();
        assert!(matches!(game.run(&rx), Err(GameError::NotStarted)));
    }

    #[test]
    fn start_uses_configured_seed() {
        let mut game = Game::new(
            headless(BLINKER_SEED, 1),
            ScriptedConsole::new(&[]),
            MemoryStore::new(),
        )
        .unwrap();
        game.start().unwrap();
        let arena = game.arena().unwrap();
        assert_eq!(arena.model().state_string(), BLINKER_SEED);
        assert_eq!(arena.model().seed(), BLINKER_SEED);
        assert_eq!(game.console().clear_calls(), 0);
    }

    #[test]
    fn bad_configured_seed_is_arena_error() {
        let mut game = Game::new(
            headless("0001x1000", 1),
            ScriptedConsole::new(&[]),
            MemoryStore::new(),
        )
        .unwrap();
        assert!(matches!(game.start(), Err(GameError::Arena(_))));
    }

    #[test]
    fn start_prompts_for_missing_dimensions() {
        let cfg = GameConfig {
            rng_seed: Some(7),
            save_prompts: false,
            ..GameConfig::default()
        };
        let mut game = Game::new(cfg, ScriptedConsole::new(&["4", "5"]), MemoryStore::new()).unwrap();
        game.start().unwrap();
        let model = game.arena().unwrap().model();
        assert_eq!((model.length(), model.height()), (4, 5));
        assert_eq!(model.seed().chars().count(), 20);
    }

    #[test]
    fn run_stops_at_generation_limit() {
        let mut game = Game::new(
            headless(BLINKER_SEED, 3),
            ScriptedConsole::new(&[]),
            MemoryStore::new(),
        )
        .unwrap();
        game.start().unwrap();
        let (_tx, rx) = unbounded::<()>();
        let summary = game.run(&rx).unwrap();

        assert_eq!(summary.generations, 3);
        assert_eq!(summary.final_generation, Generation(3));
        assert_eq!(summary.live_cells, 3);
        assert!(!summary.saved);
        assert_eq!(game.console().clear_calls(), 3);
        assert!(game.console().output().contains("Generation: (3)"));
    }

    #[test]
    fn stop_signal_ends_run_after_one_step() {
        let mut cfg = headless(BLINKER_SEED, 100);
        cfg.max_generations = None;
        let mut game = Game::new(cfg, ScriptedConsole::new(&[]), MemoryStore::new()).unwrap();
        game.start().unwrap();
        let (tx, rx) = unbounded();
        tx.send(()).unwrap();
        let summary = game.run(&rx).unwrap();
        assert_eq!(summary.generations, 1);
    }

    #[test]
    fn disconnected_stop_channel_ends_run() {
        let mut cfg = headless(BLINKER_SEED, 100);
        cfg.max_generations = None;
        let mut game = Game::new(cfg, ScriptedConsole::new(&[]), MemoryStore::new()).unwrap();
        game.start().unwrap();
        let (tx, rx) = unbounded::<()>();
        drop(tx);
        assert_eq!(game.run(&rx).unwrap().generations, 1);
    }

    #[test]
    fn resumed_game_pauses_before_first_step() {
        let mut saved = CellArena::new(3, 3).unwrap();
        saved.initialize_with_seed(BLINKER_SEED).unwrap();
        saved.update();
        let store = MemoryStore::new();
        store.insert("b.save.json", to_json(saved.model()).unwrap());

        let cfg = GameConfig {
            tick_interval: Duration::ZERO,
            ..GameConfig::default()
        };
        let console = ScriptedConsole::new(&["y", "1", "n"]);
        let mut game = Game::new(cfg, console, store).unwrap();
        game.start().unwrap();
        assert_eq!(game.arena().unwrap().generation(), Generation(1));
        assert!(game.console().output().contains("Generation: (1)"));

        let (tx, rx) = unbounded();
        tx.send(()).unwrap();
        let summary = game.run(&rx).unwrap();
        assert_eq!(summary.generations, 0);
        assert_eq!(summary.final_generation, Generation(1));
        assert!(!summary.saved);
    }
}
