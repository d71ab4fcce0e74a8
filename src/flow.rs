/// Screen flow: which screen is showing, which level is loaded, and how
/// long the current attempt has taken.
///
/// The binary feeds one `advance` per frame while playing and one `confirm`
/// per key press on every other screen.
use std::time::Duration;

use log::info;

use crate::compute::update;
use crate::config::GameConfig;
use crate::entities::{GameState, Input, Outcome};
use crate::error::LevelError;
use crate::level::{generate_level, load_level};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    LevelComplete,
    GameOver,
    Finished,
}

#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub screen: Screen,
    pub level_index: usize,
    /// Present only while a level is being played.
    pub game: Option<GameState>,
    /// Time spent on the current attempt.
    pub elapsed: Duration,
    /// Sum of the winning attempts of this run.
    pub total_elapsed: Duration,
    pub deaths: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Session {
            config,
            screen: Screen::Start,
            level_index: 0,
            game: None,
            elapsed: Duration::ZERO,
            total_elapsed: Duration::ZERO,
            deaths: 0,
        }
    }

    /// Read the level file and build a fresh player and world for it.
    fn load(&mut self, index: usize) -> Result<(), LevelError> {
        let path = self
            .config
            .level_path(index)
            .ok_or(LevelError::NoSuchLevel(index))?;
        let grid = load_level(&path)?;
        let state = generate_level(&grid, index, self.config.level_count())?;

        self.level_index = index;
        self.game = Some(state);
        self.elapsed = Duration::ZERO;
        self.screen = Screen::Playing;
        info!("playing level {}/{}", index + 1, self.config.level_count());
        Ok(())
    }

    /// Start a new run from the first level.
    pub fn begin(&mut self) -> Result<(), LevelError> {
        self.deaths = 0;
        self.total_elapsed = Duration::ZERO;
        self.load(0)
    }

    /// One simulation frame.  Does nothing unless a level is being played.
    pub fn advance(&mut self, input: &Input, dt: Duration) -> Outcome {
        if self.screen != Screen::Playing {
            return Outcome::Continue;
        }
        let Some(game) = self.game.as_mut() else {
            return Outcome::Continue;
        };

        self.elapsed += dt;
        let outcome = update(game, input);

        match outcome {
            Outcome::Continue => return outcome,
            Outcome::Died => {
                self.deaths += 1;
                self.screen = Screen::GameOver;
            }
            Outcome::CompletedLevel => {
                self.total_elapsed += self.elapsed;
                self.screen = Screen::LevelComplete;
            }
            Outcome::CompletedGame => {
                self.total_elapsed += self.elapsed;
                self.screen = Screen::Finished;
                info!(
                    "finished in {:.1}s with {} deaths",
                    self.total_elapsed.as_secs_f32(),
                    self.deaths
                );
            }
        }

        self.game = None;
        outcome
    }

    /// Leave the current non-playing screen.
    pub fn confirm(&mut self) -> Result<(), LevelError> {
        match self.screen {
            Screen::Start => self.begin(),
            Screen::Playing => Ok(()),
            Screen::GameOver => self.load(self.level_index),
            Screen::LevelComplete => self.load(self.level_index + 1),
            Screen::Finished => {
                self.screen = Screen::Start;
                Ok(())
            }
        }
    }
}
