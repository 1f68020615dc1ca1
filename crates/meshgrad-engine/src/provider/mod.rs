//! Grid sources consulted once per render tick.
//!
//! `MeshDataProvider` is a closed enum over the two variants:
//! - `Static`: holds the last published grid; no notion of time
//! - `Animated`: derives a grid from the initial one and elapsed time
//!
//! Both hand out `Arc<Grid<ControlPoint>>` snapshots. Publishing swaps the whole
//! `Arc`; a snapshot already handed out is never modified.
//!
//! Switching variants means building a new provider from a `MeshGradientState`.

mod animator;
mod configuration;
mod data_provider;
mod motion;
mod state;
mod static_provider;

pub use animator::MeshAnimator;
pub use configuration::{AnimatorConfigHandle, AnimatorConfiguration};
pub use data_provider::MeshDataProvider;
pub use motion::{Drift, MeshMotion, Stationary};
pub use state::MeshGradientState;
pub use static_provider::StaticMeshDataProvider;
