mod engine;
pub mod frame_loop;
pub mod raycast;
pub mod shade;
pub mod types;

pub use engine::Engine;
pub use frame_loop::{
    FrameError, FrameLoop, FrameState, FrameStats, InputSource, Presenter, SimContext,
};
pub use raycast::{camera_x, cast_column, cast_ray};
pub use shade::{ColumnRun, WallSlice, WallStyle, flat_colour, shade_column, texture_column};
pub use types::{RayHit, Screen, Side};
