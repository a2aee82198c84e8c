//! All game entity types: plain data plus a few geometric queries.

use crate::consts::{PLAYER_BOTTOM_OFFSET, PLAYER_SIZE, PLAYER_SPEED};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned integer rectangle used for both drawing and collision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
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

    /// Box of a square whose top-left is at (`x`, `y`); coordinates truncate
    /// toward zero.
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x as i32, y as i32, size as i32, size as i32)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap; rectangles that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Horizontal speed in units per second.
    pub speed: f32,
}

impl Player {
    /// The player as placed at the start of every game: horizontally centred,
    /// `PLAYER_BOTTOM_OFFSET` above the bottom edge.
    pub fn spawn(width: u32, height: u32) -> Self {
        Self {
            x: (width / 2) as f32 - PLAYER_SIZE / 2.0,
            y: height as f32 - PLAYER_BOTTOM_OFFSET,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Fall speed in units per second.
    pub speed: f32,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }

    /// True once the enemy's top edge has passed below `screen_height`.
    pub fn off_screen(&self, screen_height: u32) -> bool {
        self.y > screen_height as f32
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Seconds accumulated towards the next spawn.
    pub spawn_timer: f32,
    /// Seconds between spawns; shrinks as the level rises.
    pub spawn_interval: f32,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub width: u32,
    pub height: u32,
}
