// Fixed set of square wall textures, generated from pixel formulas at
// start-up. The caster and shader refer to them through `TextureId` only.

use thiserror::Error;

use crate::renderer::{ALPHA_OPAQUE, Rgba};
use crate::world::grid::TileId;

/// Runtime handle for a texture in the bank.
pub type TextureId = u16;

/// Side length used when nothing else is asked for.
pub const DEFAULT_TEXTURE_SIDE: usize = 64;

/// Number of textures in the procedural set.
pub const PROCEDURAL_COUNT: usize = 8;

/// Square texture, 32-bit **ARGB** (0xAARRGGBB) in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub side: usize,
    pub pixels: Vec<Rgba>,
}

impl Texture {
    /// Fill a `side × side` texture from `f(x, y)`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                pixels.push(f(x, y));
            }
        }
        Self { side, pixels }
    }

    /// Texel at column `x`, row `y`.
    #[inline(always)]
    pub fn texel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.side + x]
    }
}

/// Things that can go wrong when building or querying the bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// Row wrapping relies on masking with `side - 1`.
    #[error("texture side {0} is not a power of two")]
    NotPowerOfTwo(usize),
}

/// The wall textures, immutable once built.
///
/// All textures share one side length, so the shader can mask texel rows
/// with `side - 1`.
#[derive(Clone, Debug)]
pub struct TextureBank {
    side: usize,
    data: Vec<Texture>,
}

impl TextureBank {
    /// Generate the eight formula textures at `side × side`.
    pub fn procedural(side: usize) -> Result<Self, TextureError> {
        if !side.is_power_of_two() {
            return Err(TextureError::NotPowerOfTwo(side));
        }

        let data = (0..PROCEDURAL_COUNT)
            .map(|n| Texture::from_fn(side, |x, y| procedural_texel(n, side, x, y)))
            .collect();

        tracing::debug!(side, count = PROCEDURAL_COUNT, "generated procedural textures");
        Ok(Self { side, data })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Texture id for a wall tile: `tile - 1`, clamped into the bank.
    #[inline]
    pub fn id_for_tile(&self, tile: TileId) -> TextureId {
        let last = self.data.len().saturating_sub(1) as TextureId;
        tile.saturating_sub(1).min(last)
    }

    /// Texture drawn on a wall tile.
    #[inline]
    pub fn for_tile(&self, tile: TileId) -> &Texture {
        &self.data[self.id_for_tile(tile) as usize]
    }
}

/// Texel `(x, y)` of procedural texture `n`.
fn procedural_texel(n: usize, side: usize, x: usize, y: usize) -> Rgba {
    let xor = ((x * 256 / side) ^ (y * 256 / side)) as u32;
    let ycol = (y * 256 / side) as u32;
    let xy = (y * 128 / side + x * 128 / side) as u32;

    let rgb = match n {
        // red with a black cross
        0 => {
            if x != y && x != side - y {
                254 << 16
            } else {
                0
            }
        }
        // sloped greyscale
        1 => xy | xy << 8 | xy << 16,
        // sloped yellow gradient
        2 => xy << 8 | xy << 16,
        // xor greyscale
        3 => xor | xor << 8 | xor << 16,
        // xor green
        4 => xor << 8,
        // red bricks
        5 => {
            if x % 16 != 0 && y % 16 != 0 {
                192 << 16
            } else {
                0
            }
        }
        // red gradient
        6 => ycol << 16,
        // flat grey
        _ => 128 | 128 << 8 | 128 << 16,
    };
    ALPHA_OPAQUE | (rgb & 0x00FF_FFFF)
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
