//! Scene rendering: translates game state into drawing calls.
//!
//! Each function receives a mutable surface and an immutable view of the
//! game state.  No game logic is performed here, and nothing is presented:
//! the driver calls `Surface::present` once the frame is complete.

use std::io;

use crate::consts::{
    C_BACKGROUND, C_ENEMY, C_GAME_OVER, C_HUD, C_MENU_BACKGROUND, C_MENU_HINT, C_PLAYER,
    C_RESTART_HINT,
};
use crate::entities::{Enemy, GameState, GameStatus, Player};
use crate::surface::{Color, Surface, TextSize};

pub const TITLE: &str = "Dodge the Blocks";
pub const MENU_HINT: &str = "Press SPACE to start, ESC to quit";
pub const GAME_OVER: &str = "Game Over";
pub const RESTART_HINT: &str = "Press R to restart";

// ── Public entry points ───────────────────────────────────────────────────────

/// Draw one complete gameplay frame.
pub fn render<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.clear(C_BACKGROUND)?;

    draw_player(surface, &state.player)?;
    for enemy in &state.enemies {
        draw_enemy(surface, enemy)?;
    }

    draw_hud(surface, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(surface)?;
    }
    Ok(())
}

/// Draw the title screen.
pub fn render_menu<S: Surface>(surface: &mut S) -> io::Result<()> {
    surface.clear(C_MENU_BACKGROUND)?;

    let mid = surface.height() / 2.0;
    draw_centered(surface, TITLE, mid - 80.0, TextSize::Large, Color::WHITE)?;
    draw_centered(surface, MENU_HINT, mid, TextSize::Small, C_MENU_HINT)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<S: Surface>(surface: &mut S, player: &Player) -> io::Result<()> {
    surface.fill_rect(player.bounds(), C_PLAYER)
}

fn draw_enemy<S: Surface>(surface: &mut S, enemy: &Enemy) -> io::Result<()> {
    surface.fill_rect(enemy.bounds(), C_ENEMY)
}

// ── HUD & overlays ────────────────────────────────────────────────────────────

fn draw_hud<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    let score = format!("Score: {}", state.score);
    let level = format!("Level: {}", state.level);
    surface.draw_text(&score, 10.0, 10.0, TextSize::Normal, C_HUD)?;
    surface.draw_text(&level, 10.0, 40.0, TextSize::Normal, C_HUD)?;
    Ok(())
}

fn draw_game_over<S: Surface>(surface: &mut S) -> io::Result<()> {
    let mid = surface.height() / 2.0;
    draw_centered(surface, GAME_OVER, mid - 60.0, TextSize::Huge, C_GAME_OVER)?;
    draw_centered(surface, RESTART_HINT, mid + 20.0, TextSize::Normal, C_RESTART_HINT)?;
    Ok(())
}

fn draw_centered<S: Surface>(
    surface: &mut S,
    text: &str,
    y: f32,
    size: TextSize,
    color: Color,
) -> io::Result<()> {
    let x = surface.width() / 2.0 - surface.text_width(text, size) / 2.0;
    surface.draw_text(text, x, y, size, color)
}
