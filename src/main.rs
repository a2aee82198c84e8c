use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use rand::{thread_rng, Rng};

use dodge_blocks::compute::{init_state, reset, tick};
use dodge_blocks::consts::{FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};
use dodge_blocks::display::{render, render_menu};
use dodge_blocks::entities::{GameState, GameStatus};
use dodge_blocks::input::KeyTracker;
use dodge_blocks::surface::Surface;
use dodge_blocks::terminal::{Session, TerminalSurface};

type Screen<'a, W> = TerminalSurface<&'a mut W>;

// ── Input plumbing ────────────────────────────────────────────────────────────

/// Collect every pending terminal event without blocking.
fn drain_events() -> std::io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn on_resize<W: Write>(screen: &mut Screen<'_, W>, cols: u16, rows: u16) {
    screen.resize(cols, rows);
    let (cols, rows) = screen.size();
    log::debug!("Terminal resized to {}x{} cells", cols, rows);
}

/// Sleep off whatever is left of the current frame.
fn wait_for_next_frame(frame_start: Instant) {
    let elapsed = frame_start.elapsed();
    if elapsed < FRAME {
        std::thread::sleep(FRAME - elapsed);
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum MenuResult {
    Start,
    Quit,
}

/// Show the title screen until SPACE (start) or ESC (quit).
fn show_menu<W: Write>(screen: &mut Screen<'_, W>) -> std::io::Result<MenuResult> {
    loop {
        let frame_start = Instant::now();

        for ev in drain_events()? {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => {
                    if is_quit(code, modifiers) {
                        return Ok(MenuResult::Quit);
                    }
                    if code == KeyCode::Char(' ') {
                        return Ok(MenuResult::Start);
                    }
                }
                Event::Resize(cols, rows) => on_resize(screen, cols, rows),
                _ => {}
            }
        }

        render_menu(screen)?;
        screen.present()?;

        wait_for_next_frame(frame_start);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until the player quits.
///
/// Each frame: read input → tick → draw → present.  `dt` is the wall-clock
/// time since the previous frame.
fn game_loop<W: Write>(
    screen: &mut Screen<'_, W>,
    state: &mut GameState,
    rng: &mut impl Rng,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut keys = if keyboard_enhanced {
        KeyTracker::with_release_events()
    } else {
        KeyTracker::new()
    };
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;
        keys.next_frame();

        for ev in drain_events()? {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    keys.record(code, kind);
                    if kind != KeyEventKind::Press {
                        continue;
                    }
                    if is_quit(code, modifiers) {
                        log::info!("Quitting with score {}", state.score);
                        return Ok(());
                    }
                    if matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
                        && state.status == GameStatus::GameOver
                    {
                        *state = reset(state);
                    }
                }
                Event::Resize(cols, rows) => on_resize(screen, cols, rows),
                _ => {}
            }
        }

        *state = tick(state, &keys, dt, rng);

        render(screen, state)?;
        screen.present()?;

        wait_for_next_frame(frame_start);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dropping the session restores the terminal, on success and on error.
    let mut session = Session::enter(BufWriter::new(stdout()), true)
        .context("failed to set up the terminal")?;
    let keyboard_enhanced = session.keyboard_enhanced();
    log::debug!("Key release reporting: {}", keyboard_enhanced);

    let result = run(session.writer(), keyboard_enhanced);
    drop(session);
    result
}

fn run<W: Write>(out: &mut W, keyboard_enhanced: bool) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    log::debug!("Terminal is {}x{} cells", cols, rows);

    let mut screen = TerminalSurface::new(out, cols, rows, SCREEN_WIDTH, SCREEN_HEIGHT);

    if show_menu(&mut screen)? == MenuResult::Quit {
        log::info!("Quit from menu");
        return Ok(());
    }

    log::info!("Game started");
    let mut state = init_state(SCREEN_WIDTH, SCREEN_HEIGHT);
    game_loop(&mut screen, &mut state, &mut thread_rng(), keyboard_enhanced)?;
    Ok(())
}
