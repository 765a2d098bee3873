//! Turn a [`RayHit`] into one vertical run of pixels.

use crate::{
    engine::types::{RayHit, Side},
    renderer::{Colour, Rgba, darken},
    world::{Texture, TileId},
};

/// How wall pixels are coloured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WallStyle {
    /// Sample the tile's procedural texture.
    #[default]
    Textured,
    /// One solid colour per tile id.
    Flat,
}

/// Screen extent of one wall slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlice {
    /// Unclipped slice height in pixels.
    pub line_height: i32,
    /// First row drawn.
    pub draw_start: usize,
    /// One past the last row drawn.
    pub draw_end: usize,
}

impl WallSlice {
    /// Project a wall at `perp_wall_dist` onto a screen `screen_h` rows tall.
    ///
    /// Slices taller than the screen are clipped, not scaled.
    pub fn project(perp_wall_dist: f64, screen_h: usize) -> Self {
        let h = screen_h as i32;
        let line_height = (screen_h as f64 / perp_wall_dist) as i32;

        let draw_start = (-line_height / 2 + h / 2).max(0);
        let draw_end = (line_height / 2 + h / 2).min(h - 1).max(draw_start);

        Self {
            line_height,
            draw_start: draw_start as usize,
            draw_end: draw_end as usize,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draw_start >= self.draw_end
    }
}

/// Texture column for a hit, mirrored so textures read the same way from
/// either side of a wall.
pub fn texture_column(hit: &RayHit, side: usize) -> usize {
    let tex_x = ((hit.wall_x * side as f64) as usize).min(side - 1);
    let mirrored = match hit.side {
        Side::X => hit.ray_dir.x > 0.0,
        Side::Y => hit.ray_dir.y < 0.0,
    };
    if mirrored { side - tex_x - 1 } else { tex_x }
}

/// A shaded column ready for the compositor.
#[derive(Clone, Copy, Debug)]
pub struct ColumnRun<'t> {
    pub slice: WallSlice,
    pub tex_x: usize,
    side: Side,
    /// Texture rows per screen row.
    step: f64,
    /// Texture row at `slice.draw_start`.
    tex_pos: f64,
    texture: &'t Texture,
}

impl ColumnRun<'_> {
    /// Texture row sampled for screen row `y`.
    #[inline(always)]
    pub fn texel_row(&self, y: usize) -> usize {
        let pos = self.tex_pos + (y - self.slice.draw_start) as f64 * self.step;
        (pos as i32 as usize) & (self.texture.side - 1)
    }

    /// Final pixel for screen row `y`, side shading applied.
    #[inline(always)]
    pub fn colour_at(&self, y: usize) -> Rgba {
        let px = self.texture.texel(self.tex_x, self.texel_row(y));
        match self.side {
            Side::X => px,
            Side::Y => darken(px),
        }
    }
}

/// Shade `hit` with `texture` for a screen `screen_h` rows tall.
pub fn shade_column<'t>(hit: &RayHit, texture: &'t Texture, screen_h: usize) -> ColumnRun<'t> {
    let slice = WallSlice::project(hit.perp_wall_dist, screen_h);
    let side = texture.side;

    let step = if slice.line_height > 0 {
        side as f64 / slice.line_height as f64
    } else {
        0.0
    };
    let h = screen_h as i32;
    let tex_pos = (slice.draw_start as i32 - h / 2 + slice.line_height / 2) as f64 * step;

    ColumnRun {
        slice,
        tex_x: texture_column(hit, side),
        side: hit.side,
        step,
        tex_pos,
        texture,
    }
}

/// Solid colour for a wall tile in [`WallStyle::Flat`].
pub fn flat_colour(tile: TileId, side: Side) -> Rgba {
    let base = match tile {
        1 => Colour::RED,
        2 => Colour::GREEN,
        3 => Colour::BLUE,
        4 => Colour::WHITE,
        _ => Colour::YELLOW,
    };
    match side {
        Side::X => base.pack(),
        Side::Y => darken(base.pack()),
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
