/// Rendering layer — all terminal I/O lives here.
///
/// The world is simulated in pixels; here every `CELL_W`×`CELL_H` block of
/// screen pixels becomes one terminal cell.  Row 0 is the HUD, the playfield
/// starts at row 1 and the controls hint sits under it.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use the_forest::camera::{render_list, SpriteDraw, SpriteId};
use the_forest::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use the_forest::entities::{PlayerSprite, Pose};
use the_forest::flow::{Screen, Session};

const CELL_W: i32 = 16;
const CELL_H: i32 = 32;

const FIELD_COLS: i32 = SCREEN_WIDTH / CELL_W;
const FIELD_ROWS: i32 = SCREEN_HEIGHT / CELL_H;
const FIELD_TOP: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_HAZARD: Color = Color::Grey;
const C_FLAG: Color = Color::Red;
const C_POLE: Color = Color::White;
const C_TITLE: Color = Color::Green;

const HINT: &str = "← → / A D : Move   SPACE / W : Jump   Q : Quit";

/// Glyph and colour for a ground tile, keyed by its level character.
fn tile_style(glyph: char) -> (&'static str, Color) {
    match glyph {
        '-' => ("▀", Color::Green),
        '#' => ("█", Color::DarkYellow),
        '=' => ("▄", Color::Grey),
        '~' => ("▒", Color::Blue),
        _ => ("▓", Color::DarkGreen),
    }
}

fn player_glyphs(sprite: &PlayerSprite) -> (&'static str, &'static str) {
    let head = if sprite.frame % 2 == 0 { "o" } else { "O" };
    let body = match (sprite.pose, sprite.flipped) {
        (Pose::Idle, _) => "|",
        (Pose::Run, false) => ">",
        (Pose::Run, true) => "<",
        (Pose::Jump, false) => "/",
        (Pose::Jump, true) => "\\",
    };
    (head, body)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever screen the session is on.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    size: (u16, u16),
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match session.screen {
        Screen::Start => draw_start(out, size)?,
        Screen::Playing => draw_playing(out, session, size)?,
        Screen::GameOver => draw_banner(
            out,
            size,
            &[
                ("╔══════════════════╗".to_string(), Color::Red),
                ("║    GAME  OVER    ║".to_string(), Color::Red),
                ("╚══════════════════╝".to_string(), Color::Red),
                (format!("Deaths: {}", session.deaths), Color::Yellow),
                ("Any key - Retry   Q - Quit".to_string(), Color::White),
            ],
        )?,
        Screen::LevelComplete => draw_banner(
            out,
            size,
            &[
                (format!("Level {} complete!", session.level_index + 1), Color::Green),
                (format!("Time: {:.1}s", session.elapsed.as_secs_f32()), Color::Yellow),
                ("Any key - Next level   Q - Quit".to_string(), Color::White),
            ],
        )?,
        Screen::Finished => draw_banner(
            out,
            size,
            &[
                ("You made it out of the forest!".to_string(), Color::Green),
                (
                    format!("Total time: {:.1}s", session.total_elapsed.as_secs_f32()),
                    Color::Yellow,
                ),
                (format!("Deaths: {}", session.deaths), Color::Yellow),
                ("Any key - Title   Q - Quit".to_string(), Color::White),
            ],
        )?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, size.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_playing<W: Write>(
    out: &mut W,
    session: &Session,
    size: (u16, u16),
) -> std::io::Result<()> {
    let Some(game) = &session.game else {
        return Ok(());
    };

    for draw in render_list(game) {
        draw_sprite(out, &draw, size)?;
    }

    draw_hud(out, session)?;

    let hint_row = FIELD_TOP + FIELD_ROWS as u16;
    if hint_row < size.1 {
        out.queue(cursor::MoveTo(1, hint_row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(HINT))?;
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "THE FOREST   Level {}/{}   Time {:>6.1}s   Deaths {}",
        session.level_index + 1,
        session.config.level_count(),
        session.elapsed.as_secs_f32(),
        session.deaths
    )))?;
    Ok(())
}

/// Fill every terminal cell the sprite's box touches, clipped to the
/// playfield and to the terminal.
fn draw_sprite<W: Write>(
    out: &mut W,
    draw: &SpriteDraw,
    size: (u16, u16),
) -> std::io::Result<()> {
    let r = &draw.rect;
    let col0 = r.x.div_euclid(CELL_W).max(0);
    let col1 = ((r.right() + CELL_W - 1).div_euclid(CELL_W)).min(FIELD_COLS);
    let row0 = r.y.div_euclid(CELL_H).max(0);
    let row1 = ((r.bottom() + CELL_H - 1).div_euclid(CELL_H)).min(FIELD_ROWS);

    for row in row0..row1 {
        let term_row = FIELD_TOP + row as u16;
        if term_row >= size.1 {
            break;
        }
        let (glyph, color) = match draw.sprite {
            SpriteId::Ground(c) => tile_style(c),
            SpriteId::Hazard => ("●", C_HAZARD),
            SpriteId::Goal if row == row0 => ("⚑", C_FLAG),
            SpriteId::Goal => ("│", C_POLE),
            SpriteId::Player(sprite) => {
                let (head, body) = player_glyphs(&sprite);
                (if row == row0 { head } else { body }, C_PLAYER)
            }
        };
        out.queue(style::SetForegroundColor(color))?;
        for col in col0..col1 {
            if col as u16 >= size.0 {
                break;
            }
            out.queue(cursor::MoveTo(col as u16, term_row))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Menu screens ──────────────────────────────────────────────────────────────

fn draw_start<W: Write>(out: &mut W, size: (u16, u16)) -> std::io::Result<()> {
    draw_banner(
        out,
        size,
        &[
            ("🌲  T H E   F O R E S T  🌲".to_string(), C_TITLE),
            (String::new(), C_HINT),
            ("Reach the flag ⚑, avoid the stones ●".to_string(), Color::White),
            ("and don't fall into the gaps.".to_string(), Color::White),
            (String::new(), C_HINT),
            (HINT.to_string(), C_HINT),
            (String::new(), C_HINT),
            ("Press any key to start".to_string(), Color::Yellow),
        ],
    )
}

fn draw_banner<W: Write>(
    out: &mut W,
    size: (u16, u16),
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = size.0 / 2;
    let start_row = (size.1 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}
