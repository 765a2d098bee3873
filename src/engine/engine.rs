use crate::{
    engine::{
        raycast::cast_column,
        shade::{WallSlice, WallStyle, flat_colour, shade_column},
        types::Screen,
    },
    renderer::{Renderer, Rgba},
    world::{Grid, Pose, TextureBank},
};

/// Everything needed to draw one frame: the map, the textures and a
/// renderer to composite into.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub grid: Grid,
    pub texture_bank: TextureBank,
    pub screen: Screen,
    pub style: WallStyle,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, grid: Grid, texture_bank: TextureBank, w: usize, h: usize) -> Self {
        if !grid.is_bordered() {
            tracing::warn!(
                width = grid.width(),
                height = grid.height(),
                "grid border is not solid; rays leaving the map draw nothing"
            );
        }
        Self {
            renderer,
            grid,
            texture_bank,
            screen: Screen::new(w, h),
            style: WallStyle::default(),
        }
    }

    pub fn with_style(mut self, style: WallStyle) -> Self {
        self.style = style;
        self
    }

    /// Clear the frame and draw every column as seen from `pose`.
    ///
    /// Returns how many columns found no wall.
    pub fn draw_columns(&mut self, pose: &Pose) -> usize {
        let Screen { w, h } = self.screen;
        self.renderer.begin_frame(w, h);

        let mut misses = 0;
        for x in 0..w {
            let Some(hit) = cast_column(&self.grid, pose, x, w) else {
                misses += 1;
                continue;
            };

            match self.style {
                WallStyle::Textured => {
                    let tex = self.texture_bank.for_tile(hit.tile);
                    let run = shade_column(&hit, tex, h);
                    self.renderer.draw_column(
                        x,
                        run.slice.draw_start,
                        run.slice.draw_end,
                        |y| run.colour_at(y),
                    );
                }
                WallStyle::Flat => {
                    let slice = WallSlice::project(hit.perp_wall_dist, h);
                    let colour = flat_colour(hit.tile, hit.side);
                    self.renderer
                        .draw_column(x, slice.draw_start, slice.draw_end, |_| colour);
                }
            }
        }
        misses
    }

    /// Hand the finished frame to `submit`.
    pub fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.renderer.end_frame(submit)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
