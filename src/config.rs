//! Command-line configuration shared by the binaries.

use clap::Parser;
use thiserror::Error;

use crate::engine::WallStyle;

/// Invalid combinations clap cannot catch on its own.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size {0}x{1} must be non-zero")]
    EmptyScreen(usize, usize),

    #[error("texture size {0} must be a power of two")]
    TextureSize(usize),

    #[error("camera plane length {0} must be positive and finite")]
    FovPlane(f64),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "raycast", about = "First-person ray-cast view of a tile grid")]
pub struct Config {
    /// Window width in pixels (one ray per column)
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// Side length of the generated wall textures
    #[arg(long, default_value_t = crate::world::DEFAULT_TEXTURE_SIDE)]
    pub texture_size: usize,

    /// Draw walls in solid colours instead of textures
    #[arg(long)]
    pub flat: bool,

    /// Camera plane length; 0.66 gives a 66° field of view
    #[arg(long, default_value_t = 0.66)]
    pub fov_plane: f64,

    /// Frame-rate cap (0 = unlimited)
    #[arg(long, default_value_t = 60)]
    pub target_fps: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen(self.width, self.height));
        }
        if !self.texture_size.is_power_of_two() {
            return Err(ConfigError::TextureSize(self.texture_size));
        }
        if !(self.fov_plane.is_finite() && self.fov_plane > 0.0) {
            return Err(ConfigError::FovPlane(self.fov_plane));
        }
        Ok(())
    }

    pub fn wall_style(&self) -> WallStyle {
        if self.flat {
            WallStyle::Flat
        } else {
            WallStyle::Textured
        }
    }

    /// `tracing` filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_view() {
        let cfg = Config::try_parse_from(["raycast"]).unwrap();
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(cfg.texture_size, 64);
        assert_eq!(cfg.fov_plane, 0.66);
        assert_eq!(cfg.wall_style(), WallStyle::Textured);
        assert_eq!(cfg.log_filter(), "info");
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn flags_parse() {
        let cfg = Config::try_parse_from([
            "raycast", "--width", "320", "--height", "200", "--flat", "-v",
        ])
        .unwrap();
        assert_eq!((cfg.width, cfg.height), (320, 200));
        assert_eq!(cfg.wall_style(), WallStyle::Flat);
        assert_eq!(cfg.log_filter(), "debug");
    }

    #[test]
    fn validation_rejects_bad_values() {
        let cfg = Config::try_parse_from(["raycast", "--texture-size", "48"]).unwrap();
        assert_eq!(cfg.validate(), Err(ConfigError::TextureSize(48)));

        let cfg = Config::try_parse_from(["raycast", "--width", "0"]).unwrap();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyScreen(0, 480)));

        let cfg = Config::try_parse_from(["raycast", "--fov-plane", "0"]).unwrap();
        assert_eq!(cfg.validate(), Err(ConfigError::FovPlane(0.0)));
    }
}
