//! ---------------------------------------------------------------------------
//! Software (CPU) frame compositor
//!
//! * Owns a `width × height` frame-buffer in **0xAARRGGBB** format, row-major,
//!   row 0 at the top of the screen.
//! * Every column is written independently; nothing outside the requested
//!   run is touched, so pixels no wall covers keep the background.
//! ---------------------------------------------------------------------------

use crate::renderer::{BACKGROUND, Renderer, Rgba};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Column-at-a-time compositor.
pub struct Software {
    scratch: Vec<Rgba>,
    background: Rgba,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self::with_background(BACKGROUND)
    }
}

impl Software {
    pub fn with_background(background: Rgba) -> Self {
        Self {
            scratch: Vec::new(),
            background,
            width: 0,
            height: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Reset every pixel to the background.
    pub fn clear(&mut self) {
        self.scratch.fill(self.background);
    }

    /// Write rows `y_start .. y_end` of column `x`.
    ///
    /// The range is clipped to the buffer; an empty range writes nothing.
    pub fn write_column(
        &mut self,
        x: usize,
        y_start: usize,
        y_end: usize,
        mut colour_at: impl FnMut(usize) -> Rgba,
    ) {
        debug_assert!(x < self.width, "column {x} outside frame of width {}", self.width);
        if x >= self.width {
            return;
        }
        let y_end = y_end.min(self.height);
        for y in y_start..y_end {
            self.scratch[y * self.width + x] = colour_at(y);
        }
    }

    /// Read-only view of the finished frame.
    pub fn snapshot(&self) -> &[Rgba] {
        &self.scratch
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, self.background);
        }
        self.clear();
    }

    fn draw_column<F>(&mut self, x: usize, y_start: usize, y_end: usize, colour_at: F)
    where
        F: FnMut(usize) -> Rgba,
    {
        self.write_column(x, y_start, y_end, colour_at);
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
