/// Pure player logic: activity classification, motion, collision and
/// animation.
///
/// `step_player` takes the current player by reference and returns the next
/// one; only `update` writes back into the `GameState`.
use log::{debug, info};

use crate::config::{
    GRAVITY, IDLE_FRAMES, IDLE_PERIOD, JUMP_FRAMES, JUMP_PERIOD, RUN_FRAMES, RUN_PERIOD,
    SCREEN_HEIGHT, TILE_SIZE, V_JUMP, VELOCITY,
};
use crate::entities::{
    Activity, Animation, Direction, GameState, Input, Outcome, Player, PlayerSprite, Pose, Rect,
    World,
};

// ── Activity classification ───────────────────────────────────────────────────

/// Classify this frame's activity.
///
/// The grounded test looks at the box one pixel lower than the player
/// actually is, at the position from before this frame's motion.  A jump is
/// only started from the ground; once started it lasts until landing.
/// Right wins when both directions are held.
pub fn get_status(player: &Player, world: &World, input: &Input) -> Activity {
    let below = player.rect.shifted(0, 1);
    let jump = player.jumping || (input.jump_pressed && world.hits_ground(&below));

    let dir = if input.right {
        Some(Direction::Right)
    } else if input.left {
        Some(Direction::Left)
    } else {
        None
    };

    match (jump, dir) {
        (true, dir) => Activity::Jump(dir),
        (false, Some(dir)) => Activity::Run(dir),
        (false, None) => Activity::Idle,
    }
}

// ── Terminal conditions ───────────────────────────────────────────────────────

/// Death or level completion, judged on the position left by the previous
/// frame.  Death wins if both apply.
pub fn check_terminal(state: &GameState) -> Option<Outcome> {
    let rect = &state.player.rect;
    if rect.y > SCREEN_HEIGHT || state.world.hits_hazard(rect) {
        return Some(Outcome::Died);
    }
    if state.world.hits_goal(rect) {
        return Some(if state.is_last_level() {
            Outcome::CompletedGame
        } else {
            Outcome::CompletedLevel
        });
    }
    None
}

// ── Motion helpers ────────────────────────────────────────────────────────────

/// Lift the box so its bottom sits on the tile boundary at or above it.
fn snap_to_tile(rect: &mut Rect) {
    let bottom = rect.bottom();
    rect.set_bottom(bottom - bottom.rem_euclid(TILE_SIZE));
}

/// Move one step sideways, undoing the whole step if it runs into ground.
fn move_horizontal(rect: &mut Rect, world: &World, dir: Direction) {
    let dx = match dir {
        Direction::Left => -VELOCITY,
        Direction::Right => VELOCITY,
    };
    rect.x += dx;
    if world.hits_ground(rect) {
        rect.x -= dx;
    }
}

fn advance_frame(anim: &mut Animation, pose: Pose, strip_len: usize, flipped: bool) {
    anim.frame = (anim.frame + 1) % strip_len;
    anim.sprite = PlayerSprite { pose, frame: anim.frame, flipped };
}

// ── Per-frame player step ─────────────────────────────────────────────────────

/// Advance the player by one frame.  Terminal conditions are not checked here.
pub fn step_player(player: &Player, world: &World, input: &Input) -> Player {
    let mut p = *player;

    let activity = get_status(&p, world, input);
    if let Activity::Jump(_) = activity {
        p.jumping = true;
    }

    // Any change of activity restarts every animation counter.
    if activity != p.activity {
        p.anim = Animation {
            sprite: p.anim.sprite,
            ..Animation::default()
        };
        p.activity = activity;
    }

    match activity {
        Activity::Idle => {
            p.anim.idle_ticks = (p.anim.idle_ticks + 1) % IDLE_PERIOD;
            if p.anim.idle_ticks == IDLE_PERIOD - 1 {
                advance_frame(&mut p.anim, Pose::Idle, IDLE_FRAMES, false);
            }
        }

        Activity::Jump(_) => {
            p.rect.y -= p.v_jump;
            p.v_jump -= 1;

            let hit = world.hits_ground(&p.rect);
            if hit && p.v_jump < 0 {
                // landed
                snap_to_tile(&mut p.rect);
                p.jumping = false;
                p.v_jump = V_JUMP;
            } else if hit && p.v_jump > 0 {
                // head bump: back off and start falling
                let bottom = p.rect.bottom();
                p.rect.set_bottom(bottom + p.v_jump);
                p.v_jump = 0;
            }

            if let Some(dir) = activity.direction() {
                move_horizontal(&mut p.rect, world, dir);
            }

            p.anim.jump_ticks = (p.anim.jump_ticks + 1) % JUMP_PERIOD;
            if p.anim.jump_ticks == JUMP_PERIOD - 1 {
                let flipped = activity.direction() == Some(Direction::Left);
                advance_frame(&mut p.anim, Pose::Jump, JUMP_FRAMES, flipped);
            }
        }

        Activity::Run(dir) => {
            move_horizontal(&mut p.rect, world, dir);

            p.anim.run_ticks = (p.anim.run_ticks + 1) % RUN_PERIOD;
            if p.anim.run_ticks == RUN_PERIOD - 1 {
                advance_frame(&mut p.anim, Pose::Run, RUN_FRAMES, dir == Direction::Left);
            }
        }
    }

    if !p.jumping {
        let bottom = p.rect.bottom();
        p.rect.set_bottom(bottom + GRAVITY);
        if world.hits_ground(&p.rect) {
            snap_to_tile(&mut p.rect);
        }
    }

    p
}

// ── Frame entry point ─────────────────────────────────────────────────────────

/// Run one frame of the simulation.
///
/// On `Died`, `CompletedLevel` or `CompletedGame` the state is left untouched;
/// the caller tears the level down and builds the next one.
pub fn update(state: &mut GameState, input: &Input) -> Outcome {
    if let Some(outcome) = check_terminal(state) {
        info!(
            "level {}: {:?} at frame {} ({}, {})",
            state.level_index + 1,
            outcome,
            state.frame,
            state.player.rect.x,
            state.player.rect.y
        );
        return outcome;
    }

    let next = step_player(&state.player, &state.world, input);
    if next.activity != state.player.activity {
        debug!("activity {:?} -> {:?}", state.player.activity, next.activity);
    }

    state.player = next;
    state.frame += 1;
    Outcome::Continue
}
