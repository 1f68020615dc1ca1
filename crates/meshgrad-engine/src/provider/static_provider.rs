use std::sync::{Arc, PoisonError, RwLock};

use crate::mesh::{ControlPoint, Grid};

/// Provider whose grid only changes when a new one is published.
///
/// Clones share the same slot, so one clone can publish from a different thread
/// while the render tick reads through another.
#[derive(Debug, Clone)]
pub struct StaticMeshDataProvider {
    slot: Arc<RwLock<Arc<Grid<ControlPoint>>>>,
}

impl StaticMeshDataProvider {
    pub fn new(grid: Grid<ControlPoint>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(grid))),
        }
    }

    /// Latest published grid.
    pub fn grid(&self) -> Arc<Grid<ControlPoint>> {
        // The slot only ever holds a complete Arc, poisoned or not.
        Arc::clone(&self.slot.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the grid. Snapshots handed out earlier are unaffected.
    pub fn set_grid(&self, grid: Grid<ControlPoint>) {
        self.publish(Arc::new(grid));
    }

    pub fn publish(&self, grid: Arc<Grid<ControlPoint>>) {
        log::debug!("static grid published ({}x{})", grid.width(), grid.height());
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = grid;
    }
}
