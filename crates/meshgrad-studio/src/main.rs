use std::time::{Duration, Instant};

use anyhow::Context;
use meshgrad_engine::config::HostCapabilities;
use meshgrad_engine::coords::{ColorRgb, Vec2};
use meshgrad_engine::logging::{init_logging, LoggingConfig};
use meshgrad_engine::mesh::{BezierPoint, ControlPoint, Grid};
use meshgrad_engine::provider::{AnimatorConfiguration, MeshGradientState};
use meshgrad_engine::render::{FrameSink, MeshFrame, RenderParams};
use meshgrad_engine::session::MeshSession;
use meshgrad_engine::time::FrameClock;

const DEFAULT_FRAMES: u64 = 180;

/// Logs a summary line every second of presented frames.
struct StatsSink {
    window_start: Instant,
    window_frames: u32,
    total_vertices: usize,
}

impl StatsSink {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            window_frames: 0,
            total_vertices: 0,
        }
    }
}

impl FrameSink for StatsSink {
    fn present(&mut self, frame: &MeshFrame<'_>) -> anyhow::Result<()> {
        self.window_frames += 1;
        self.total_vertices += frame.mesh.vertex_count();

        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            log::info!(
                "frame {:>5}  {}x{} grid  {} verts  {} tris  {:.1} fps",
                frame.frame_index,
                frame.grid_width,
                frame.grid_height,
                frame.mesh.vertex_count(),
                frame.mesh.triangle_count(),
                self.window_frames as f64 / elapsed.as_secs_f64(),
            );
            self.window_start = Instant::now();
            self.window_frames = 0;
        }
        Ok(())
    }
}

// ── scene ─────────────────────────────────────────────────────────────────

fn palette() -> [ColorRgb; 9] {
    [
        ColorRgb::from_u8(0x1b, 0x1f, 0x3b),
        ColorRgb::from_u8(0x53, 0x3a, 0x7b),
        ColorRgb::from_u8(0x1b, 0x1f, 0x3b),
        ColorRgb::from_u8(0x2b, 0x6c, 0xb0),
        ColorRgb::from_u8(0xf2, 0x8f, 0x3b),
        ColorRgb::from_u8(0xc8, 0x42, 0x6b),
        ColorRgb::from_u8(0x1b, 0x1f, 0x3b),
        ColorRgb::from_u8(0xf6, 0xd5, 0x5c),
        ColorRgb::from_u8(0x1b, 0x1f, 0x3b),
    ]
}

fn initial_grid() -> anyhow::Result<Grid<ControlPoint>> {
    let mut points = Vec::with_capacity(9);
    for y in 0..3 {
        for x in 0..3 {
            let position = Vec2::new(x as f32 * 0.5, y as f32 * 0.5);
            let handle = if x == 1 && y == 1 { 0.2 } else { 0.12 };
            points.push(BezierPoint::symmetric(
                position,
                Vec2::new(handle, 0.0),
                Vec2::new(0.0, handle),
            ));
        }
    }
    Grid::from_bezier_points(3, &points, &palette()).context("building initial grid")
}

fn frame_budget() -> anyhow::Result<u64> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("frame count must be an integer, got `{arg}`")),
        None => Ok(DEFAULT_FRAMES),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let frames = frame_budget()?;
    let state = MeshGradientState::Animated {
        initial: initial_grid()?,
        configuration: AnimatorConfiguration::new(60)?,
    };
    let mut session = MeshSession::new(&state, RenderParams::default(), HostCapabilities::new(60))?;
    let interval = Duration::from_secs_f64(1.0 / session.preferred_frames_per_second() as f64);

    log::info!(
        "running {frames} frames at {} fps ({} subdivisions)",
        session.preferred_frames_per_second(),
        session.params().subdivisions
    );

    let mut sink = StatsSink::new();
    let mut clock = FrameClock::new();
    let started = Instant::now();

    for _ in 0..frames {
        let frame_start = Instant::now();
        let time = clock.tick();
        session.render_after(time.dt, &mut sink)?;

        if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    let wall = started.elapsed();
    log::info!(
        "done: {} frames in {:.2}s, {} vertices tessellated",
        frames,
        wall.as_secs_f64(),
        sink.total_vertices
    );
    Ok(())
}
