/// Horizontal follow camera and the per-frame draw list.
use crate::config::SCREEN_WIDTH;
use crate::entities::{EntityKind, GameState, PlayerSprite, Rect};

/// Horizontal offset added to every world x before drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Camera {
    pub dx: i32,
}

impl Camera {
    /// Centre `target` horizontally on the screen.
    pub fn follow(target: &Rect) -> Camera {
        Camera {
            dx: -(target.center_x() - SCREEN_WIDTH / 2),
        }
    }

    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.shifted(self.dx, 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteId {
    Player(PlayerSprite),
    Ground(char),
    Hazard,
    Goal,
}

/// One thing to draw, already in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub rect: Rect,
}

fn on_screen(rect: &Rect) -> bool {
    rect.right() > 0 && rect.x < SCREEN_WIDTH
}

/// Everything visible this frame.  The player comes last so it draws on top.
pub fn render_list(state: &GameState) -> Vec<SpriteDraw> {
    let camera = Camera::follow(&state.player.rect);

    let mut draws: Vec<SpriteDraw> = state
        .world
        .entities
        .iter()
        .map(|e| SpriteDraw {
            sprite: match e.kind {
                EntityKind::Ground(c) => SpriteId::Ground(c),
                EntityKind::Hazard => SpriteId::Hazard,
                EntityKind::Goal => SpriteId::Goal,
            },
            rect: camera.apply(&e.rect),
        })
        .filter(|d| on_screen(&d.rect))
        .collect();

    draws.push(SpriteDraw {
        sprite: SpriteId::Player(state.player.anim.sprite),
        rect: camera.apply(&state.player.rect),
    });
    draws
}
