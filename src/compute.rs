//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! (and, where needed, an input snapshot and an RNG handle) and returns a
//! brand-new value.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::consts::{
    ENEMY_BASE_SPEED, ENEMY_MAX_SIZE, ENEMY_MIN_SIZE, ENEMY_SPEED_JITTER, ENEMY_SPEED_PER_LEVEL,
    INITIAL_SPAWN_INTERVAL, MIN_SPAWN_INTERVAL, POINTS_PER_LEVEL, SPAWN_INTERVAL_STEP,
};
use crate::entities::{Enemy, GameState, GameStatus, Player};
use crate::input::InputState;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a play field of the given size.
pub fn init_state(width: u32, height: u32) -> GameState {
    GameState {
        player: Player::spawn(width, height),
        enemies: Vec::new(),
        spawn_timer: 0.0,
        spawn_interval: INITIAL_SPAWN_INTERVAL,
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        width,
        height,
    }
}

/// Start over on the same play field.
pub fn reset(state: &GameState) -> GameState {
    log::info!("Resetting game (previous score {})", state.score);
    init_state(state.width, state.height)
}

// ── Entity motion ────────────────────────────────────────────────────────────

/// Move the player horizontally for `dt` seconds according to `input`.
///
/// Opposite directions cancel.  The result always satisfies
/// `0 <= x` and `x + size <= screen_width`.
pub fn move_player(
    player: &Player,
    input: &impl InputState,
    dt: f32,
    screen_width: u32,
) -> Player {
    let step = player.speed * dt;
    let mut dx = 0.0;
    if input.left() {
        dx -= step;
    }
    if input.right() {
        dx += step;
    }

    let max_x = (screen_width as f32 - player.size).max(0.0);
    Player {
        x: (player.x + dx).clamp(0.0, max_x),
        ..player.clone()
    }
}

/// Let an enemy fall for `dt` seconds.
pub fn advance_enemy(enemy: &Enemy, dt: f32) -> Enemy {
    Enemy {
        y: enemy.y + enemy.speed * dt,
        ..enemy.clone()
    }
}

/// Create a new enemy just above the visible area.
///
/// Size and column are uniform integers; speed grows linearly with the
/// current level on top of a random jitter.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> Enemy {
    let size = rng.gen_range(ENEMY_MIN_SIZE..=ENEMY_MAX_SIZE);
    let x = rng.gen_range(0..=state.width.saturating_sub(size));
    let speed = ENEMY_BASE_SPEED
        + rng.gen::<f32>() * ENEMY_SPEED_JITTER
        + state.level.saturating_sub(1) as f32 * ENEMY_SPEED_PER_LEVEL;

    log::trace!("Spawning enemy: size={} x={} speed={:.1}", size, x, speed);

    Enemy {
        x: x as f32,
        y: -(size as f32),
        size: size as f32,
        speed,
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Credit one enemy that made it past the bottom edge.
///
/// Every `POINTS_PER_LEVEL` points the level rises and enemies spawn more
/// often, down to `MIN_SPAWN_INTERVAL`.
pub fn register_escape(state: &GameState) -> GameState {
    let score = state.score + 1;
    if score % POINTS_PER_LEVEL != 0 {
        return GameState {
            score,
            ..state.clone()
        };
    }

    let level = state.level + 1;
    let spawn_interval = (state.spawn_interval - SPAWN_INTERVAL_STEP).max(MIN_SPAWN_INTERVAL);
    log::debug!(
        "Level up: level={} spawn_interval={:.2}s",
        level,
        spawn_interval
    );
    GameState {
        score,
        level,
        spawn_interval,
        ..state.clone()
    }
}

// ── Per-frame tick (RNG injected) ─────────────────────────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Once the game is over this returns the state unchanged.
pub fn tick(
    state: &GameState,
    input: &impl InputState,
    dt: f32,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Move the player ───────────────────────────────────────────────────
    let player = move_player(&state.player, input, dt, state.width);

    // ── 2. Spawn timer: subtract the interval, keep the overshoot ─────────────
    let mut spawn_timer = state.spawn_timer + dt;
    let mut enemies = state.enemies.clone();
    if spawn_timer >= state.spawn_interval {
        spawn_timer -= state.spawn_interval;
        enemies.push(spawn_enemy(state, rng));
    }

    // ── 3. Let enemies fall, split off the ones that left the screen ─────────
    let (escaped, enemies): (Vec<Enemy>, Vec<Enemy>) = enemies
        .iter()
        .map(|e| advance_enemy(e, dt))
        .partition(|e| e.off_screen(state.height));

    let moved = GameState {
        player,
        enemies,
        spawn_timer,
        ..state.clone()
    };
    let scored = escaped.iter().fold(moved, |s, _| register_escape(&s));

    // ── 4. Collision: any remaining enemy touching the player ends the run ───
    let player_box = scored.player.bounds();
    let hit = scored
        .enemies
        .iter()
        .any(|e| e.bounds().intersects(&player_box));

    if hit {
        log::info!(
            "Game over: score={} level={}",
            scored.score,
            scored.level
        );
        GameState {
            status: GameStatus::GameOver,
            ..scored
        }
    } else {
        scored
    }
}
