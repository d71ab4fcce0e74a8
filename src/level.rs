/// Level loading and entity placement.
///
/// A level file is a grid of characters, one row per line:
///
/// ```text
/// @   player spawn      x   hazard (stone)
/// f   goal flag         .   empty
/// anything else         ground tile keyed by that character
/// ```
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::entities::{Entity, GameState, Player, World};
use crate::error::LevelError;

pub const SPAWN: char = '@';
pub const HAZARD: char = 'x';
pub const GOAL: char = 'f';
pub const EMPTY: char = '.';

/// Rectangular character grid.  Every row has the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|r| r.iter().collect())
    }

    /// Row-major iteration over `(col, row, char)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, chars)| {
                chars
                    .iter()
                    .enumerate()
                    .map(move |(col, &c)| (col, row, c))
            })
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Split into lines, strip trailing whitespace and right-pad with `.` to the
/// longest line.
pub fn parse_grid(text: &str) -> Result<Grid, LevelError> {
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.trim_end().chars().collect()).collect();
    if lines.is_empty() {
        return Err(LevelError::Empty);
    }

    let max_width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let rows = lines
        .into_iter()
        .map(|mut row| {
            row.resize(max_width, EMPTY);
            row
        })
        .collect();

    Ok(Grid { rows })
}

pub fn load_level(path: &Path) -> Result<Grid, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&text)?;
    info!(
        "loaded level {} ({}x{} cells)",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Build the world and the player for one attempt at a level.  The grid must
/// contain exactly one spawn marker.
pub fn generate_level(
    grid: &Grid,
    level_index: usize,
    level_count: usize,
) -> Result<GameState, LevelError> {
    let mut entities = Vec::new();
    let mut spawns = Vec::new();

    for (col, row, c) in grid.cells() {
        match c {
            SPAWN => spawns.push(Player::spawn(col, row)),
            HAZARD => entities.push(Entity::hazard(col, row)),
            GOAL => entities.push(Entity::goal(col, row)),
            EMPTY | ' ' => {}
            glyph => entities.push(Entity::ground(glyph, col, row)),
        }
    }

    let player = match spawns.len() {
        0 => return Err(LevelError::MissingSpawn),
        1 => spawns[0],
        count => return Err(LevelError::MultipleSpawns { count }),
    };

    debug!(
        "placed {} entities, player at ({}, {})",
        entities.len(),
        player.rect.x,
        player.rect.y
    );

    Ok(GameState {
        level_index,
        level_count,
        world: World::new(entities),
        player,
        frame: 0,
    })
}
