//! Ray-casting renderer for 2-D tile grids.
//!
//! * [`world`]    – grid, procedural textures and the player pose.
//! * [`engine`]   – per-column DDA, column shading and the frame loop.
//! * [`renderer`] – pixel format and the software frame compositor.
//! * [`sim`]      – input intents, clock and the motion integrator.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
