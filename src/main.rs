//! Top-down grid viewer: tiles, player and the fan of cast rays.
//!
//! Same controls as `view_sw`, handy for checking what the caster hits.
//!
//! ```bash
//! cargo run --release --bin raycast_rs -- --width 768 --height 768
//! ```

use clap::Parser;
use glam::DVec2;
use minifb::{Key, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use raycast_rs::{
    config::Config,
    engine::{Side, cast_column, flat_colour},
    renderer::{BACKGROUND, Rgba},
    sim::{Clock, InputCmd, InstantClock, advance, delta_seconds},
    world::{Grid, Pose},
};

/// Rays drawn in the fan; every `width / RAY_COUNT`-th screen column.
const RAY_COUNT: usize = 48;
const RAY_COLOUR: Rgba = 0xFF_FFFF00;
const PLAYER_COLOUR: Rgba = 0xFF_00FFFF;

fn main() -> anyhow::Result<()> {
    let cfg = Config::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_filter())),
        )
        .init();
    cfg.validate()?;

    let (w, h) = (cfg.width, cfg.height);
    let grid = Grid::reference();
    let mut pose = Pose::reference_start(cfg.fov_plane);

    // ─────────── grid‑space → screen‑space transform ────────────
    let cell = (w / grid.width()).min(h / grid.height()).max(1) as f64;
    let offset_x = (w as f64 - grid.width() as f64 * cell) / 2.0;
    let offset_y = (h as f64 - grid.height() as f64 * cell) / 2.0;
    let to_screen = |p: DVec2| -> (i32, i32) {
        ((p.x * cell + offset_x) as i32, (p.y * cell + offset_y) as i32)
    };

    let mut buffer = vec![BACKGROUND; w * h];
    let mut win = Window::new("Grid map", w, h, WindowOptions::default())?;
    win.set_target_fps(cfg.target_fps);

    let clock = InstantClock::new();
    let mut previous = clock.now_millis();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        buffer.fill(BACKGROUND);

        // ─────────── tiles ────────────
        for gy in 0..grid.height() {
            for gx in 0..grid.width() {
                let tile = grid[(gx, gy)];
                if tile == 0 {
                    continue;
                }
                let (x0, y0) = to_screen(DVec2::new(gx as f64, gy as f64));
                let (x1, y1) = to_screen(DVec2::new(gx as f64 + 1.0, gy as f64 + 1.0));
                fill_rect(&mut buffer, w, h, x0, y0, x1 - 1, y1 - 1, flat_colour(tile, Side::Y));
            }
        }

        // ─────────── ray fan ────────────
        let (px, py) = to_screen(pose.pos);
        for i in 0..RAY_COUNT {
            let col = i * w / RAY_COUNT;
            if let Some(hit) = cast_column(grid, &pose, col, w) {
                let end = pose.pos + hit.ray_dir * hit.perp_wall_dist;
                let (ex, ey) = to_screen(end);
                draw_line(&mut buffer, w, h, px, py, ex, ey, RAY_COLOUR);
            }
        }
        fill_rect(&mut buffer, w, h, px - 2, py - 2, px + 2, py + 2, PLAYER_COLOUR);

        win.update_with_buffer(&buffer, w, h)?;

        // ─────────── move ────────────
        let now = clock.now_millis();
        let dt = delta_seconds(previous, now);
        previous = now;
        pose = advance(&pose, held_keys(&win), grid, dt);
    }
    Ok(())
}

/// Intents from the keys held right now.
fn held_keys(win: &Window) -> InputCmd {
    let down = |a: Key, b: Key| (win.is_key_down(a) || win.is_key_down(b)) as i32;
    InputCmd {
        move_intent: down(Key::Up, Key::W) - down(Key::Down, Key::S),
        rotate_intent: down(Key::Left, Key::A) - down(Key::Right, Key::D),
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_rect(buf: &mut [u32], w: usize, h: usize, x0: i32, y0: i32, x1: i32, y1: i32, colour: u32) {
    for y in y0.max(0)..=y1.min(h as i32 - 1) {
        for x in x0.max(0)..=x1.min(w as i32 - 1) {
            buf[y as usize * w + x as usize] = colour;
        }
    }
}

/// Integer Bresenham line‑drawing algorithm.
#[allow(clippy::too_many_arguments)]
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
