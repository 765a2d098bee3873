mod grid;
mod pose;
mod texture;

pub use grid::{EMPTY, Grid, GridError, TileId};

pub use pose::Pose;

pub use texture::{
    DEFAULT_TEXTURE_SIDE, PROCEDURAL_COUNT, Texture, TextureBank, TextureError, TextureId,
};
