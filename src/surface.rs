//! Drawing primitives shared by every rendering backend.
//!
//! Scene code in `display` only talks to the `Surface` trait, so it can be
//! exercised without a real terminal.

use std::io;

use crate::entities::Rect;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Relative text size. Backends that cannot scale glyphs treat it as a hint.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TextSize {
    Small,
    Normal,
    Large,
    Huge,
}

/// An immediate-mode 2D target addressed in logical units.
pub trait Surface {
    /// Logical width of the play field.
    fn width(&self) -> f32;
    /// Logical height of the play field.
    fn height(&self) -> f32;

    /// Fill the entire surface.
    fn clear(&mut self, color: Color) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;
    /// Draw `text` with its top-left corner at (`x`, `y`).
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: TextSize,
        color: Color,
    ) -> io::Result<()>;
    /// Logical width `text` would occupy when drawn at `size`.
    fn text_width(&self, text: &str, size: TextSize) -> f32;

    /// Make everything drawn since the last `present` visible.
    fn present(&mut self) -> io::Result<()>;
}
