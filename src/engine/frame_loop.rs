//! Frame orchestration: draw, present, read input, move.
//!
//! The window, keyboard and clock are reached only through [`Presenter`],
//! [`InputSource`] and [`Clock`], so the loop runs unchanged against a
//! real window or a test double.

use thiserror::Error;

use crate::{
    engine::Engine,
    renderer::{Renderer, Rgba},
    sim::{Clock, InputCmd, advance, delta_seconds},
    world::Pose,
};

/// How often the frame-rate report is logged.
const REPORT_INTERVAL_MS: f64 = 3000.0;

/// Failures surfaced by the loop. Everything inside the column pass is
/// infallible; only the outside world can fail.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("presenting frame failed: {0}")]
    Present(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Where finished frames go.
pub trait Presenter {
    /// Show a finished `width × height` frame. May block until vsync.
    fn present(&mut self, frame: &[Rgba], width: usize, height: usize) -> Result<(), FrameError>;

    /// Polled once per frame; `true` ends the loop.
    fn should_shutdown(&self) -> bool;
}

/// Where movement intents come from.
pub trait InputSource {
    /// Current net intents, read once per frame.
    fn poll(&mut self) -> InputCmd;
}

/// Phase of the frame currently running (or last finished).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    CastingColumns,
    Presenting,
    Integrating,
    Shutdown,
}

/// Everything one running view owns: the engine and the player pose.
pub struct SimContext<R: Renderer> {
    pub engine: Engine<R>,
    pub pose: Pose,
}

impl<R: Renderer> SimContext<R> {
    pub fn new(engine: Engine<R>, pose: Pose) -> Self {
        if !engine.grid.is_traversable(pose.pos.x, pose.pos.y) {
            tracing::warn!(x = pose.pos.x, y = pose.pos.y, "start pose is not in an open cell");
        }
        Self { engine, pose }
    }
}

/// Rolling frame-time average, reported every few seconds.
#[derive(Debug, Default)]
pub struct FrameStats {
    acc_ms: f64,
    frames: usize,
    total_frames: u64,
}

impl FrameStats {
    /// Add one frame. Returns the average frame time in ms when a report
    /// interval has filled up, and starts a new interval.
    pub fn record(&mut self, frame_ms: f64) -> Option<f64> {
        self.acc_ms += frame_ms;
        self.frames += 1;
        self.total_frames += 1;

        if self.acc_ms < REPORT_INTERVAL_MS {
            return None;
        }
        let avg = self.acc_ms / self.frames as f64;
        self.acc_ms = 0.0;
        self.frames = 0;
        Some(avg)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

/// Drives [`SimContext`] one frame at a time.
pub struct FrameLoop<R: Renderer, C: Clock> {
    ctx: SimContext<R>,
    clock: C,
    previous_ms: f64,
    state: FrameState,
    stats: FrameStats,
    reported_misses: bool,
}

impl<R: Renderer, C: Clock> FrameLoop<R, C> {
    pub fn new(ctx: SimContext<R>, clock: C) -> Self {
        let previous_ms = clock.now_millis();
        Self {
            ctx,
            clock,
            previous_ms,
            state: FrameState::Idle,
            stats: FrameStats::default(),
            reported_misses: false,
        }
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.ctx.pose
    }

    #[inline]
    pub fn context(&self) -> &SimContext<R> {
        &self.ctx
    }

    #[inline]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run one full frame. Returns the state the loop ended in:
    /// [`FrameState::Idle`] after a frame, [`FrameState::Shutdown`] once the
    /// presenter asks to stop.
    pub fn step<P>(&mut self, platform: &mut P) -> Result<FrameState, FrameError>
    where
        P: Presenter + InputSource,
    {
        if self.state == FrameState::Shutdown || platform.should_shutdown() {
            self.state = FrameState::Shutdown;
            return Ok(self.state);
        }

        /* 1. columns: pose is frozen for the whole pass --------------- */
        self.state = FrameState::CastingColumns;
        let misses = self.ctx.engine.draw_columns(&self.ctx.pose);
        if misses > 0 {
            if !self.reported_misses {
                tracing::warn!(misses, "rays left the grid without hitting a wall");
                self.reported_misses = true;
            }
            tracing::debug!(misses, "columns without a wall");
        }

        /* 2. present ---------------------------------------------------- */
        self.state = FrameState::Presenting;
        self.ctx
            .engine
            .end_frame(|fb, w, h| platform.present(fb, w, h))?;

        /* 3. time, input, motion --------------------------------------- */
        self.state = FrameState::Integrating;
        let now = self.clock.now_millis();
        let frame_ms = now - self.previous_ms;
        let dt = delta_seconds(self.previous_ms, now);
        self.previous_ms = now;

        let cmd = platform.poll();
        self.ctx.pose = advance(&self.ctx.pose, cmd, &self.ctx.engine.grid, dt);

        if let Some(avg_ms) = self.stats.record(frame_ms) {
            tracing::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
        }

        self.state = FrameState::Idle;
        Ok(self.state)
    }

    /// Loop until shutdown or a presentation error.
    pub fn run<P>(&mut self, platform: &mut P) -> Result<(), FrameError>
    where
        P: Presenter + InputSource,
    {
        while self.step(platform)? != FrameState::Shutdown {}
        tracing::info!(frames = self.stats.total_frames(), "frame loop stopped");
        Ok(())
    }

    /// Give the context back, e.g. to inspect the final pose.
    pub fn into_context(self) -> SimContext<R> {
        self.ctx
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
