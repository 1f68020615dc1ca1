//! Mesh data model.
//!
//! Responsibilities:
//! - `ControlPoint`: position, colour and the two curvature tangents of one node
//! - `Grid<T>`: row-major, immutable-by-convention container with fixed topology
//! - `BezierPoint`: authoring input whose handles are turned into tangents
//! - construction of `Grid<ControlPoint>` from parallel point/colour sequences
//!
//! Grids are values. Anything that wants a "different" grid builds a new one and
//! publishes it whole (see `provider`), so a reader never sees a half-updated grid.

mod bezier;
mod build;
mod control_point;
mod grid;

pub use bezier::BezierPoint;
pub use build::Locations;
pub use control_point::ControlPoint;
pub use grid::Grid;
