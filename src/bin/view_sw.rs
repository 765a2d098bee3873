//! First-person software ray-caster.
//!
//! Controls  ↑/W forward · ↓/S back · ←/A turn left · →/D turn right · Esc quit
//!
//! ```bash
//! cargo run --release -- --width 800 --height 600
//! ```

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use raycast_rs::{
    config::Config,
    engine::{Engine, FrameError, FrameLoop, InputSource, Presenter, SimContext},
    renderer::{Rgba, Software},
    sim::{Action, InputCmd, InputState, InstantClock},
    world::{Grid, Pose, TextureBank},
};

/// minifb window acting as both display and keyboard.
struct MinifbPlatform {
    win: Window,
    input: InputState,
}

impl MinifbPlatform {
    fn new(win: Window) -> Self {
        Self {
            win,
            input: InputState::new(),
        }
    }
}

fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Up | Key::W => Some(Action::Forward),
        Key::Down | Key::S => Some(Action::Back),
        Key::Left | Key::A => Some(Action::TurnLeft),
        Key::Right | Key::D => Some(Action::TurnRight),
        _ => None,
    }
}

impl Presenter for MinifbPlatform {
    fn present(&mut self, frame: &[Rgba], width: usize, height: usize) -> Result<(), FrameError> {
        self.win
            .update_with_buffer(frame, width, height)
            .map_err(|e| FrameError::Present(Box::new(e)))
    }

    fn should_shutdown(&self) -> bool {
        !self.win.is_open() || self.win.is_key_down(Key::Escape)
    }
}

impl InputSource for MinifbPlatform {
    fn poll(&mut self) -> InputCmd {
        // releases are lost while unfocused; start clean instead of drifting
        if !self.win.is_active() {
            self.input.reset();
            return self.input.snapshot();
        }
        for key in self.win.get_keys_pressed(KeyRepeat::No) {
            if let Some(action) = action_for(key) {
                self.input.press(action);
            }
        }
        for key in self.win.get_keys_released() {
            if let Some(action) = action_for(key) {
                self.input.release(action);
            }
        }
        self.input.snapshot()
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_filter())),
        )
        .init();

    cfg.validate()?;

    let bank = TextureBank::procedural(cfg.texture_size)?;
    let engine = Engine::new(
        Software::default(),
        Grid::reference().clone(),
        bank,
        cfg.width,
        cfg.height,
    )
    .with_style(cfg.wall_style());
    let ctx = SimContext::new(engine, Pose::reference_start(cfg.fov_plane));

    let mut win = Window::new("Raycasting", cfg.width, cfg.height, WindowOptions::default())
        .context("failed to create window")?;
    win.set_target_fps(cfg.target_fps);

    tracing::info!(
        width = cfg.width,
        height = cfg.height,
        style = ?cfg.wall_style(),
        "raycaster starting"
    );

    let mut platform = MinifbPlatform::new(win);
    let mut frame_loop = FrameLoop::new(ctx, InstantClock::new());
    frame_loop.run(&mut platform)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_share_actions() {
        assert_eq!(action_for(Key::Up), action_for(Key::W));
        assert_eq!(action_for(Key::Left), Some(Action::TurnLeft));
        assert_eq!(action_for(Key::D), Some(Action::TurnRight));
        assert_eq!(action_for(Key::Space), None);
    }
}
