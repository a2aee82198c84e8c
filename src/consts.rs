//! Hard-coded tuning. Distances are logical units, times are seconds.

use std::time::Duration;

use crate::surface::Color;

// ── Screen & timing ──────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: u32 = 600;
pub const SCREEN_HEIGHT: u32 = 800;

pub const TARGET_FPS: u32 = 60;
pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 400.0;
/// Distance from the bottom edge to the player's top.
pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

// ── Enemies & difficulty ramp ────────────────────────────────────────────────

pub const ENEMY_MIN_SIZE: u32 = 20;
pub const ENEMY_MAX_SIZE: u32 = 50;
pub const ENEMY_BASE_SPEED: f32 = 120.0;
/// Upper bound (exclusive) of the random speed bonus.
pub const ENEMY_SPEED_JITTER: f32 = 80.0;
pub const ENEMY_SPEED_PER_LEVEL: f32 = 20.0;

pub const INITIAL_SPAWN_INTERVAL: f32 = 1.0;
pub const SPAWN_INTERVAL_STEP: f32 = 0.08;
pub const MIN_SPAWN_INTERVAL: f32 = 0.25;
pub const POINTS_PER_LEVEL: u32 = 10;

// ── Input ────────────────────────────────────────────────────────────────────

/// A key is "held" if its last press/repeat arrived within this many frames.
/// Classic terminals never report releases, and OS key repeat (≥ 15 Hz)
/// refreshes a held key well inside this window at 60 FPS.
pub const HOLD_WINDOW: u64 = 4;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Color = Color::new_rgb(67, 67, 67);
pub const C_MENU_BACKGROUND: Color = Color::new_rgb(30, 30, 30);
pub const C_PLAYER: Color = Color::new_rgb(255, 192, 203);
pub const C_ENEMY: Color = Color::new_rgb(200, 50, 50);
pub const C_HUD: Color = Color::WHITE;
pub const C_GAME_OVER: Color = Color::new_rgb(255, 150, 150);
pub const C_RESTART_HINT: Color = Color::new_rgb(220, 220, 220);
pub const C_MENU_HINT: Color = Color::new_rgb(200, 200, 200);
