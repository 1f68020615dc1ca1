//! Pluggable motion for the animated provider.
//!
//! A motion maps `(node, initial control point, elapsed seconds)` to the node's
//! control point at that time. The animator applies it to every node of the
//! initial grid, so a motion can change positions, colours and tangents but
//! never the grid's topology.
//!
//! Contract for implementations:
//! - pure in `elapsed` once prepared (same inputs, same output)
//! - continuous in `elapsed`
//! - any randomness drawn in `prepare` from a caller-provided seed

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coords::Vec2;
use crate::mesh::{ControlPoint, Grid};

pub trait MeshMotion: Send {
    /// Called once with the initial grid before the first sample.
    fn prepare(&mut self, initial: &Grid<ControlPoint>) {
        let _ = initial;
    }

    /// Control point of node `(x, y)` at `elapsed` seconds.
    fn sample(&self, x: usize, y: usize, initial: &ControlPoint, elapsed: f64) -> ControlPoint;
}

impl<F> MeshMotion for F
where
    F: Fn(usize, usize, &ControlPoint, f64) -> ControlPoint + Send,
{
    fn sample(&self, x: usize, y: usize, initial: &ControlPoint, elapsed: f64) -> ControlPoint {
        self(x, y, initial, elapsed)
    }
}

/// Leaves every node where it started.
#[derive(Debug, Copy, Clone, Default)]
pub struct Stationary;

impl MeshMotion for Stationary {
    fn sample(&self, _x: usize, _y: usize, initial: &ControlPoint, _elapsed: f64) -> ControlPoint {
        *initial
    }
}

/// Seeded sinusoidal drift of node positions.
///
/// Each node oscillates around its initial position on both axes with its own
/// phase and frequency, drawn from `StdRng::seed_from_u64(seed)`. Nodes on the
/// left/right border keep their x, nodes on the top/bottom border keep their y,
/// so the mesh keeps covering the same rectangle. Colours and tangents are kept.
///
/// Speed is bounded: `|d position / dt| <= amplitude * TAU * speed * 1.5 * sqrt(2)`.
#[derive(Debug, Clone)]
pub struct Drift {
    seed: u64,
    amplitude: f32,
    speed: f32,
    width: usize,
    height: usize,
    oscillators: Vec<Oscillator>,
}

#[derive(Debug, Copy, Clone)]
struct Oscillator {
    phase: [f64; 2],
    frequency: [f64; 2],
}

impl Drift {
    pub const DEFAULT_AMPLITUDE: f32 = 0.08;
    pub const DEFAULT_SPEED: f32 = 0.2;

    /// `amplitude` is in render-space units, `speed` is the mean oscillation
    /// frequency in Hz. Negative values are treated as zero.
    pub fn new(seed: u64, amplitude: f32, speed: f32) -> Self {
        Self {
            seed,
            amplitude: amplitude.max(0.0),
            speed: speed.max(0.0),
            width: 0,
            height: 0,
            oscillators: Vec::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Self::DEFAULT_AMPLITUDE, Self::DEFAULT_SPEED)
    }

    /// Upper bound on how fast any node moves, in render units per second.
    pub fn max_speed(&self) -> f64 {
        f64::from(self.amplitude) * TAU * f64::from(self.speed) * 1.5 * std::f64::consts::SQRT_2
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl MeshMotion for Drift {
    fn prepare(&mut self, initial: &Grid<ControlPoint>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let speed = f64::from(self.speed);
        self.width = initial.width();
        self.height = initial.height();
        self.oscillators = (0..initial.len())
            .map(|_| Oscillator {
                phase: [rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU)],
                frequency: [
                    speed * rng.gen_range(0.5..1.5),
                    speed * rng.gen_range(0.5..1.5),
                ],
            })
            .collect();
    }

    fn sample(&self, x: usize, y: usize, initial: &ControlPoint, elapsed: f64) -> ControlPoint {
        let Some(osc) = self.oscillators.get(y * self.width + x) else {
            return *initial;
        };
        let amplitude = f64::from(self.amplitude);
        let wave = |axis: usize| amplitude * (TAU * osc.frequency[axis] * elapsed + osc.phase[axis]).sin();

        let dx = if x == 0 || x + 1 == self.width { 0.0 } else { wave(0) };
        let dy = if y == 0 || y + 1 == self.height { 0.0 } else { wave(1) };

        ControlPoint {
            position: initial.position + Vec2::new(dx as f32, dy as f32),
            ..*initial
        }
    }
}
