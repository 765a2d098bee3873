//! Rendering abstraction layer.
//!
//! *The caster never touches a pixel buffer directly.*
//! It produces one vertical run per screen column and hands it to a type
//! that implements [`Renderer`].

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Alpha bits of a fully opaque pixel.
pub const ALPHA_OPAQUE: Rgba = 0xFF00_0000;

/// Frame background left in every pixel no wall covers.
pub const BACKGROUND: Rgba = 0xFF_000000;

/// Plain RGB colour with channels in `0.0 ..= 1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);
    pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pack into an opaque frame-buffer pixel.
    pub fn pack(self) -> Rgba {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        ALPHA_OPAQUE | ch(self.r) << 16 | ch(self.g) << 8 | ch(self.b)
    }
}

/// Multiply every channel by `factor`.
#[inline]
pub fn scale(c: Colour, factor: f32) -> Colour {
    Colour::new(c.r * factor, c.g * factor, c.b * factor)
}

/// Halve every colour channel of a packed pixel, keeping alpha.
#[inline(always)]
pub fn darken(px: Rgba) -> Rgba {
    (px & ALPHA_OPAQUE) | ((px >> 1) & 0x007F_7F7F)
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Write rows `y_start .. y_end` of column `x`, asking `colour_at(y)`
    /// for each pixel. Rows outside the range keep their current value.
    fn draw_column<F>(&mut self, x: usize, y_start: usize, y_end: usize, colour_at: F)
    where
        F: FnMut(usize) -> Rgba;

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame and its
    /// result is passed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

pub mod software;

pub use software::Software;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_primaries() {
        assert_eq!(Colour::RED.pack(), 0xFFFF_0000);
        assert_eq!(Colour::GREEN.pack(), 0xFF00_FF00);
        assert_eq!(Colour::YELLOW.pack(), 0xFFFF_FF00);
        assert_eq!(scale(Colour::WHITE, 0.5).pack(), 0xFF80_8080);
    }

    #[test]
    fn darken_never_brightens() {
        for px in [0xFFFF_FFFF, 0xFF01_0203, 0xFF80_7F00, ALPHA_OPAQUE, 0xFFC0_0000] {
            let d = darken(px);
            assert_eq!(d & ALPHA_OPAQUE, ALPHA_OPAQUE);
            for shift in [0, 8, 16] {
                let before = (px >> shift) & 0xFF;
                let after = (d >> shift) & 0xFF;
                assert_eq!(after, before / 2);
            }
        }
    }
}
