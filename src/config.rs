/// Game configuration.
///
/// Physics and geometry live here as compile-time constants.  All distances
/// are world pixels and all durations are frames, so the simulation is tied
/// to `FPS` rather than to wall-clock time.
use std::path::PathBuf;

// ── Screen & grid ─────────────────────────────────────────────────────────────

/// Edge length of one grid cell in world pixels.
pub const TILE_SIZE: i32 = 64;

pub const SCREEN_WIDTH: i32 = 1000;

/// Eleven rows of tiles.  Falling below this kills the player.
pub const SCREEN_HEIGHT: i32 = 11 * TILE_SIZE;

pub const FPS: u64 = 60;

/// On terminals that never report key releases, a key counts as held for
/// this many frames after its last press or repeat.  Must outlast the OS
/// auto-repeat delay (commonly 250 to 600 ms) so a held key is not dropped
/// before the first repeat arrives.
pub const CLASSIC_HOLD_WINDOW: u64 = 45;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Added to the player's bottom every frame while not jumping.
pub const GRAVITY: i32 = 11;

/// Horizontal step per frame while running.
pub const VELOCITY: i32 = 6;

/// Initial upward speed of a jump; decremented by one each frame.
pub const V_JUMP: i32 = 20;

// ── Entity geometry ───────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 56;

/// Hazards start this far right of their tile's left edge.
pub const HAZARD_INSET: i32 = 10;
pub const HAZARD_WIDTH: i32 = 44;
pub const HAZARD_HEIGHT: i32 = 30;

pub const GOAL_WIDTH: i32 = 24;
pub const GOAL_HEIGHT: i32 = TILE_SIZE;

// ── Animation ─────────────────────────────────────────────────────────────────

pub const IDLE_FRAMES: usize = 6;
pub const RUN_FRAMES: usize = 7;
/// Jumping reuses the run strip.
pub const JUMP_FRAMES: usize = RUN_FRAMES;

/// Ticks between frame advances for each pose.
pub const IDLE_PERIOD: u32 = 15;
pub const RUN_PERIOD: u32 = 7;
pub const JUMP_PERIOD: u32 = 6;

// ── Level files ───────────────────────────────────────────────────────────────

pub const DEFAULT_LEVELS_DIR: &str = "levels";
pub const DEFAULT_LEVELS: [&str; 3] = ["1st_lvl.txt", "2nd_lvl.txt", "3rd_lvl.txt"];

/// Runtime settings resolved from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub levels_dir: PathBuf,
    /// Level file names, played in order.
    pub levels: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels_dir: PathBuf::from(DEFAULT_LEVELS_DIR),
            levels: DEFAULT_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn level_path(&self, index: usize) -> Option<PathBuf> {
        self.levels.get(index).map(|name| self.levels_dir.join(name))
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
