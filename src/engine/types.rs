use glam::{DVec2, IVec2};

use crate::world::TileId;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// Which kind of grid line the ray crossed to enter the wall cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Stepped along X (crossed a vertical grid line). Drawn at full brightness.
    X,
    /// Stepped along Y (crossed a horizontal grid line). Drawn darkened.
    Y,
}

/// Nearest wall along one screen column's ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the camera plane, not from the eye.
    pub perp_wall_dist: f64,
    /// Wall cell that stopped the ray.
    pub map: IVec2,
    pub tile: TileId,
    pub side: Side,
    /// Where along the wall face the ray landed, in `[0, 1)`.
    pub wall_x: f64,
    pub ray_dir: DVec2,
}
