//! Dodge the Blocks, a tiny terminal arcade game.
//!
//! - `entities`: plain game data
//! - `compute`: pure simulation functions (input and RNG injected)
//! - `input`: input-state query and terminal key tracking
//! - `surface` / `display`: drawing primitives and scene rendering
//! - `terminal`: crossterm-backed drawing surface

pub mod compute;
pub mod consts;
pub mod display;
pub mod entities;
pub mod input;
pub mod surface;
pub mod terminal;
