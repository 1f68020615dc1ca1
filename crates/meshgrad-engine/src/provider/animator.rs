use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::mesh::{ControlPoint, Grid};
use crate::time::FrameClock;

use super::{AnimatorConfigHandle, AnimatorConfiguration, Drift, MeshMotion};

/// Time-driven grid provider.
///
/// Animation time advances by the real elapsed time of every tick; a new grid
/// is published at most once per configured frame interval. Positions are a
/// function of animation time only, so changing the frame rate changes how
/// often a grid is published but never where the nodes are.
///
/// Every published grid is `initial.map_indexed(motion)` and shares the
/// initial grid's width and height.
pub struct MeshAnimator {
    initial: Arc<Grid<ControlPoint>>,
    configuration: AnimatorConfigHandle,
    motion: Box<dyn MeshMotion>,
    clock: FrameClock,

    elapsed: f64,
    since_publish: f64,
    current: Arc<Grid<ControlPoint>>,
    published: u64,
}

impl MeshAnimator {
    /// Animator with the default [`Drift`] motion (seed 0).
    pub fn new(initial: Grid<ControlPoint>, configuration: AnimatorConfiguration) -> Self {
        Self::with_motion(initial, configuration, Drift::default())
    }

    pub fn with_motion<M>(
        initial: Grid<ControlPoint>,
        configuration: AnimatorConfiguration,
        motion: M,
    ) -> Self
    where
        M: MeshMotion + 'static,
    {
        let mut motion: Box<dyn MeshMotion> = Box::new(motion);
        motion.prepare(&initial);

        let current = Arc::new(sample(&initial, motion.as_ref(), 0.0));
        log::debug!(
            "animator created ({}x{}, {} fps)",
            initial.width(),
            initial.height(),
            configuration.frames_per_second()
        );

        Self {
            initial: Arc::new(initial),
            configuration: AnimatorConfigHandle::new(configuration),
            motion,
            clock: FrameClock::new(),
            elapsed: 0.0,
            since_publish: 0.0,
            current,
            published: 1,
        }
    }

    pub fn initial(&self) -> &Arc<Grid<ControlPoint>> {
        &self.initial
    }

    pub fn configuration(&self) -> AnimatorConfiguration {
        self.configuration.get()
    }

    /// Takes effect at the start of the next tick.
    pub fn set_configuration(&self, configuration: AnimatorConfiguration) {
        log::debug!("animator reconfigured to {} fps", configuration.frames_per_second());
        self.configuration.set(configuration);
    }

    /// Handle for reconfiguring from outside the render tick.
    pub fn configuration_handle(&self) -> AnimatorConfigHandle {
        self.configuration.clone()
    }

    /// Animation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of grids published so far, including the initial one.
    pub fn published_frames(&self) -> u64 {
        self.published
    }

    /// Last published grid, without advancing time.
    pub fn snapshot(&self) -> Arc<Grid<ControlPoint>> {
        Arc::clone(&self.current)
    }

    /// Advances by the wall-clock time since the previous call.
    pub fn current_grid(&mut self) -> Arc<Grid<ControlPoint>> {
        let dt = self.clock.tick().dt;
        self.advance(dt)
    }

    /// Advances animation time by `dt` and returns the grid to draw.
    ///
    /// The configuration is read once, here. If less than one frame interval
    /// has passed since the last publication the previous grid is returned.
    pub fn advance(&mut self, dt: Duration) -> Arc<Grid<ControlPoint>> {
        let interval = self.configuration.get().frame_interval().as_secs_f64();
        let dt = dt.as_secs_f64();

        self.elapsed += dt;
        self.since_publish += dt;

        // Tolerate rounding of host timestamps against the nominal interval.
        if self.since_publish + 1e-6 >= interval {
            self.current = Arc::new(sample(&self.initial, self.motion.as_ref(), self.elapsed));
            self.since_publish = 0.0;
            self.published += 1;
        }
        Arc::clone(&self.current)
    }
}

impl fmt::Debug for MeshAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshAnimator")
            .field("width", &self.initial.width())
            .field("height", &self.initial.height())
            .field("configuration", &self.configuration.get())
            .field("elapsed", &self.elapsed)
            .field("published", &self.published)
            .finish_non_exhaustive()
    }
}

fn sample(initial: &Grid<ControlPoint>, motion: &dyn MeshMotion, elapsed: f64) -> Grid<ControlPoint> {
    initial.map_indexed(|x, y, cp| motion.sample(x, y, cp, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgb, Vec2};
    use crate::provider::Stationary;

    fn lattice(width: usize, height: usize) -> Grid<ControlPoint> {
        let mut points = Vec::new();
        for y in 0..height {
            for x in 0..width {
                points.push(Vec2::new(x as f32 / (width - 1) as f32, y as f32 / (height - 1) as f32));
            }
        }
        let colors = vec![ColorRgb::white(); points.len()];
        Grid::from_points(width, &points, &colors).unwrap()
    }

    fn fps(n: u32) -> AnimatorConfiguration {
        AnimatorConfiguration::new(n).unwrap()
    }

    fn frame(n: u32) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(n))
    }

    fn max_node_distance(a: &Grid<ControlPoint>, b: &Grid<ControlPoint>) -> f32 {
        a.elements()
            .iter()
            .zip(b.elements())
            .map(|(p, q)| (p.position - q.position).length())
            .fold(0.0, f32::max)
    }

    // ── topology ──────────────────────────────────────────────────────────

    #[test]
    fn every_tick_keeps_initial_topology() {
        let mut animator = MeshAnimator::new(lattice(4, 3), fps(60));
        for _ in 0..120 {
            let grid = animator.advance(frame(60));
            assert_eq!((grid.width(), grid.height()), (4, 3));
        }
        let grid = animator.current_grid();
        assert_eq!((grid.width(), grid.height()), (4, 3));
    }

    // ── time model ────────────────────────────────────────────────────────

    #[test]
    fn publishes_once_per_frame_interval() {
        let mut animator = MeshAnimator::new(lattice(3, 3), fps(30));
        let first = animator.snapshot();
        let held = animator.advance(frame(60));
        assert!(Arc::ptr_eq(&first, &held), "half an interval must not publish");
        let next = animator.advance(frame(60));
        assert!(!Arc::ptr_eq(&first, &next));
        assert_eq!(animator.published_frames(), 2);
    }

    #[test]
    fn elapsed_tracks_real_time() {
        let mut animator = MeshAnimator::new(lattice(3, 3), fps(60));
        for _ in 0..60 {
            animator.advance(frame(60));
        }
        assert!((animator.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MeshAnimator::with_motion(lattice(4, 4), fps(60), Drift::with_seed(21));
        let mut b = MeshAnimator::with_motion(lattice(4, 4), fps(60), Drift::with_seed(21));
        for _ in 0..90 {
            assert_eq!(*a.advance(frame(60)), *b.advance(frame(60)));
        }
    }

    #[test]
    fn frame_rate_change_does_not_jump() {
        let drift = Drift::with_seed(4);
        let bound = drift.max_speed() as f32;
        let mut animator = MeshAnimator::with_motion(lattice(4, 4), fps(60), drift);

        let mut previous = animator.snapshot();
        for tick in 0..120 {
            if tick == 45 {
                animator.set_configuration(fps(24));
            }
            let rate = if tick < 45 { 60 } else { 24 };
            let grid = animator.advance(frame(rate));
            let step = 1.0 / rate as f32;
            assert!(max_node_distance(&previous, &grid) <= bound * step + 1e-5);
            previous = grid;
        }
    }

    #[test]
    fn position_depends_on_time_not_tick_pattern() {
        let mut steady = MeshAnimator::with_motion(lattice(4, 4), fps(60), Drift::with_seed(2));
        let mut switched = MeshAnimator::with_motion(lattice(4, 4), fps(60), Drift::with_seed(2));

        for _ in 0..60 {
            steady.advance(frame(60));
        }
        for _ in 0..30 {
            switched.advance(frame(60));
        }
        switched.set_configuration(fps(30));
        for _ in 0..15 {
            switched.advance(frame(30));
        }

        assert!(max_node_distance(&steady.snapshot(), &switched.snapshot()) < 1e-4);
    }

    #[test]
    fn handle_reconfigures_running_animator() {
        let animator = MeshAnimator::new(lattice(3, 3), fps(60));
        animator.configuration_handle().set(fps(20));
        assert_eq!(animator.configuration().frames_per_second(), 20);
    }

    #[test]
    fn stationary_motion_republishes_initial_grid() {
        let mut animator = MeshAnimator::with_motion(lattice(3, 2), fps(60), Stationary);
        let grid = animator.advance(frame(10));
        assert_eq!(*grid, **animator.initial());
    }
}
