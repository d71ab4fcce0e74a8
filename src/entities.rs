/// Game entity types — plain data plus the box arithmetic they share.
use crate::config::{
    GOAL_HEIGHT, GOAL_WIDTH, HAZARD_HEIGHT, HAZARD_INSET, HAZARD_WIDTH, PLAYER_HEIGHT,
    PLAYER_WIDTH, TILE_SIZE, V_JUMP,
};

// ── Bounding box ──────────────────────────────────────────────────────────────

/// Axis-aligned box in world pixels.  `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

// ── Static entities ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Solid tile; the char is the level glyph it came from.
    Ground(char),
    Hazard,
    Goal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
}

impl Entity {
    pub fn ground(glyph: char, col: usize, row: usize) -> Self {
        Entity {
            kind: EntityKind::Ground(glyph),
            rect: Rect::new(
                col as i32 * TILE_SIZE,
                row as i32 * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE,
            ),
        }
    }

    /// Sits on the tile floor, pushed `HAZARD_INSET` px right of the tile edge.
    pub fn hazard(col: usize, row: usize) -> Self {
        let left = col as i32 * TILE_SIZE + HAZARD_INSET;
        let mut rect = Rect::new(left, 0, HAZARD_WIDTH, HAZARD_HEIGHT);
        rect.set_bottom((row as i32 + 1) * TILE_SIZE);
        Entity { kind: EntityKind::Hazard, rect }
    }

    /// Flag pole, centred in its tile.
    pub fn goal(col: usize, row: usize) -> Self {
        let left = col as i32 * TILE_SIZE + (TILE_SIZE - GOAL_WIDTH) / 2;
        let mut rect = Rect::new(left, 0, GOAL_WIDTH, GOAL_HEIGHT);
        rect.set_bottom((row as i32 + 1) * TILE_SIZE);
        Entity { kind: EntityKind::Goal, rect }
    }
}

/// The single store for every static entity of a level.  Per-kind views are
/// derived on demand instead of being kept in parallel collections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    pub entities: Vec<Entity>,
}

impl World {
    pub fn new(entities: Vec<Entity>) -> Self {
        World { entities }
    }

    pub fn ground(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::Ground(_)))
    }

    pub fn hazards(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Hazard)
    }

    pub fn goals(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Goal)
    }

    pub fn hits_ground(&self, rect: &Rect) -> bool {
        self.ground().any(|e| e.rect.overlaps(rect))
    }

    pub fn hits_hazard(&self, rect: &Rect) -> bool {
        self.hazards().any(|e| e.rect.overlaps(rect))
    }

    pub fn hits_goal(&self, rect: &Rect) -> bool {
        self.goals().any(|e| e.rect.overlaps(rect))
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// What the player is doing this frame.  The variants are the only legal
/// combinations: idle excludes everything, running has exactly one
/// direction, and a jump may carry a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Run(Direction),
    Jump(Option<Direction>),
}

impl Activity {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Activity::Idle => None,
            Activity::Run(dir) => Some(*dir),
            Activity::Jump(dir) => *dir,
        }
    }
}

/// Which animation strip a sprite comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Run,
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSprite {
    pub pose: Pose,
    pub frame: usize,
    /// Mirrored horizontally (facing left).
    pub flipped: bool,
}

/// Animation cursor.  Each pose has its own tick counter; `frame` indexes
/// whichever strip is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub idle_ticks: u32,
    pub run_ticks: u32,
    pub jump_ticks: u32,
    pub frame: usize,
    pub sprite: PlayerSprite,
}

impl Default for Animation {
    fn default() -> Self {
        Animation {
            idle_ticks: 0,
            run_ticks: 0,
            jump_ticks: 0,
            frame: 0,
            sprite: PlayerSprite { pose: Pose::Idle, frame: 0, flipped: false },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub activity: Activity,
    /// Set while a jump arc is in progress.
    pub jumping: bool,
    pub v_jump: i32,
    pub anim: Animation,
}

impl Player {
    /// Spawn standing on the floor of grid cell (`col`, `row`).
    pub fn spawn(col: usize, row: usize) -> Self {
        let mut rect = Rect::new(col as i32 * TILE_SIZE, 0, PLAYER_WIDTH, PLAYER_HEIGHT);
        rect.set_bottom((row as i32 + 1) * TILE_SIZE);
        Player {
            rect,
            activity: Activity::Idle,
            jumping: false,
            v_jump: V_JUMP,
            anim: Animation::default(),
        }
    }
}

// ── Per-frame input & result ──────────────────────────────────────────────────

/// Input snapshot for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    /// True only on the frame the jump key went down.
    pub jump_pressed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Died,
    CompletedLevel,
    CompletedGame,
}

// ── Level state ───────────────────────────────────────────────────────────────

/// Everything the core simulation owns for one attempt at a level.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub level_index: usize,
    pub level_count: usize,
    pub world: World,
    pub player: Player,
    pub frame: u64,
}

impl GameState {
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.level_count
    }
}
