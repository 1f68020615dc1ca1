use crate::error::ProviderKind;
use crate::mesh::{ControlPoint, Grid};

use super::{AnimatorConfiguration, MeshAnimator, MeshDataProvider, StaticMeshDataProvider};

/// Caller-level description of what to draw.
///
/// A new value replaces the old one whenever caller parameters change; it is
/// turned into a provider once per session.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshGradientState {
    Animated {
        initial: Grid<ControlPoint>,
        configuration: AnimatorConfiguration,
    },
    Static {
        grid: Grid<ControlPoint>,
    },
}

impl MeshGradientState {
    #[inline]
    pub fn kind(&self) -> ProviderKind {
        match self {
            MeshGradientState::Animated { .. } => ProviderKind::Animated,
            MeshGradientState::Static { .. } => ProviderKind::Static,
        }
    }

    /// The grid the state starts from.
    pub fn grid(&self) -> &Grid<ControlPoint> {
        match self {
            MeshGradientState::Animated { initial, .. } => initial,
            MeshGradientState::Static { grid } => grid,
        }
    }

    /// Instantiates the matching provider. Animated states get the default motion.
    pub fn create_data_provider(&self) -> MeshDataProvider {
        log::debug!("creating {} mesh provider", self.kind());
        match self {
            MeshGradientState::Animated {
                initial,
                configuration,
            } => MeshDataProvider::Animated(MeshAnimator::new(initial.clone(), *configuration)),
            MeshGradientState::Static { grid } => {
                MeshDataProvider::Static(StaticMeshDataProvider::new(grid.clone()))
            }
        }
    }
}
