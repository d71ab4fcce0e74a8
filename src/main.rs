mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};

use the_forest::config::{GameConfig, CLASSIC_HOLD_WINDOW, DEFAULT_LEVELS_DIR, FPS};
use the_forest::entities::Input;
use the_forest::flow::{Screen, Session};
use the_forest::input::{HeldKeys, HoldPolicy};

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS);

#[derive(Parser)]
#[command(name = "the_forest")]
#[command(about = "A small side-scrolling platformer for the terminal")]
struct Cli {
    /// Directory holding the level files
    #[arg(long, default_value = DEFAULT_LEVELS_DIR)]
    levels_dir: PathBuf,

    /// Level files to play, in order (defaults to the bundled three)
    levels: Vec<String>,

    /// Write logs to this file; filter with RUST_LOG (default: info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        let mut config = GameConfig {
            levels_dir: self.levels_dir,
            ..GameConfig::default()
        };
        if !self.levels.is_empty() {
            config.levels = self.levels;
        }
        config
    }
}

/// Logs go to a file: stderr would scribble over the raw-mode screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const JUMP_KEYS: [KeyCode; 4] = [
    KeyCode::Char(' '),
    KeyCode::Up,
    KeyCode::Char('w'),
    KeyCode::Char('W'),
];

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Held keys are tracked so left/right and jump can be combined.  Jumping
/// and menu confirmation are edge triggered: a press only counts if the key
/// was not already held, which also filters out the repeated presses classic
/// terminals send for a held key.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    policy: HoldPolicy,
) -> Result<()> {
    let mut session = Session::new(config);
    let mut held: HeldKeys<KeyCode> = HeldKeys::new(policy);
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut jump_pressed = false;
        let mut confirm = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    let fresh = held.press(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            info!("quit requested");
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        _ if !fresh => {}
                        _ => {
                            confirm = true;
                            if JUMP_KEYS.contains(&code) {
                                jump_pressed = true;
                            }
                        }
                    }
                }
                KeyEventKind::Repeat => held.repeat(code, frame),
                KeyEventKind::Release => held.release(&code),
            }
        }

        let now = Instant::now();
        let dt = now - last_tick;
        last_tick = now;

        match session.screen {
            Screen::Playing => {
                let input = Input {
                    left: held.any_held(&LEFT_KEYS, frame),
                    right: held.any_held(&RIGHT_KEYS, frame),
                    jump_pressed,
                };
                session.advance(&input, dt);
            }
            _ if confirm => session.confirm().context("failed to load level")?,
            _ => {}
        }

        display::render(out, &session, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = cli.into_config();
    info!(
        "levels from {}: {:?}",
        config.levels_dir.display(),
        config.levels
    );

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events make held-key tracking exact where supported.  The
    // query has to happen before the reader thread starts consuming events.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    let policy = if keyboard_enhanced {
        HoldPolicy::UntilRelease
    } else {
        HoldPolicy::Window(CLASSIC_HOLD_WINDOW)
    };
    info!("held keys: {policy:?}");

    // Blocking event reads happen on their own thread so the frame loop
    // never waits on the terminal.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, config, policy);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}
