use std::sync::Arc;
use std::time::Duration;

use crate::error::{MeshError, MeshResult, ProviderKind};
use crate::mesh::{ControlPoint, Grid};

use super::{AnimatorConfiguration, MeshAnimator, StaticMeshDataProvider};

/// Source of the grid drawn at each tick.
#[derive(Debug)]
pub enum MeshDataProvider {
    Static(StaticMeshDataProvider),
    Animated(MeshAnimator),
}

impl MeshDataProvider {
    #[inline]
    pub fn kind(&self) -> ProviderKind {
        match self {
            MeshDataProvider::Static(_) => ProviderKind::Static,
            MeshDataProvider::Animated(_) => ProviderKind::Animated,
        }
    }

    /// Grid for the current tick, timed by the provider's own clock.
    pub fn current_grid(&mut self) -> Arc<Grid<ControlPoint>> {
        match self {
            MeshDataProvider::Static(p) => p.grid(),
            MeshDataProvider::Animated(a) => a.current_grid(),
        }
    }

    /// Grid for the current tick, `dt` after the previous one.
    ///
    /// For hosts that supply their own frame timestamps. Static providers ignore `dt`.
    pub fn grid_after(&mut self, dt: Duration) -> Arc<Grid<ControlPoint>> {
        match self {
            MeshDataProvider::Static(p) => p.grid(),
            MeshDataProvider::Animated(a) => a.advance(dt),
        }
    }

    /// Publishes a new grid. Static providers only.
    pub fn set_grid(&self, grid: Grid<ControlPoint>) -> MeshResult<()> {
        match self {
            MeshDataProvider::Static(p) => {
                p.set_grid(grid);
                Ok(())
            }
            MeshDataProvider::Animated(_) => Err(mismatch(ProviderKind::Static, self.kind())),
        }
    }

    /// Replaces the animator configuration. Animated providers only.
    pub fn set_animator_configuration(&self, configuration: AnimatorConfiguration) -> MeshResult<()> {
        match self {
            MeshDataProvider::Animated(a) => {
                a.set_configuration(configuration);
                Ok(())
            }
            MeshDataProvider::Static(_) => Err(mismatch(ProviderKind::Animated, self.kind())),
        }
    }

    pub fn as_static(&self) -> Option<&StaticMeshDataProvider> {
        match self {
            MeshDataProvider::Static(p) => Some(p),
            MeshDataProvider::Animated(_) => None,
        }
    }

    pub fn as_animator(&self) -> Option<&MeshAnimator> {
        match self {
            MeshDataProvider::Animated(a) => Some(a),
            MeshDataProvider::Static(_) => None,
        }
    }
}

fn mismatch(expected: ProviderKind, found: ProviderKind) -> MeshError {
    log::error!("{expected} operation issued against a {found} mesh provider");
    MeshError::StateMismatch { expected, found }
}
