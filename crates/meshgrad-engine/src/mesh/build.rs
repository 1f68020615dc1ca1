//! `Grid<ControlPoint>` construction from parallel position/colour sequences.

use crate::coords::{to_render_space, ColorRgb, Vec2};
use crate::error::{MeshError, MeshResult};

use super::grid::derive_height;
use super::{BezierPoint, ControlPoint, Grid};

/// Node locations as authored, before conversion to control points.
#[derive(Debug, Clone, PartialEq)]
pub enum Locations {
    /// Plain positions; tangents are zero.
    Points(Vec<Vec2>),
    /// Positions with Bézier handles; tangents are derived.
    BezierPoints(Vec<BezierPoint>),
}

impl Locations {
    pub fn len(&self) -> usize {
        match self {
            Locations::Points(p) => p.len(),
            Locations::BezierPoints(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Grid<ControlPoint> {
    /// Builds a grid from authoring-space positions and colours paired by index.
    ///
    /// Tangents are zero, so every cell tessellates flat.
    pub fn from_points(width: usize, points: &[Vec2], colors: &[ColorRgb]) -> MeshResult<Self> {
        check_parallel(width, points.len(), colors.len())?;
        let elements = points
            .iter()
            .zip(colors)
            .map(|(&p, &c)| ControlPoint::flat(to_render_space(p), c))
            .collect();
        let grid = Grid::from_row_major(width, elements)?;
        log::debug!("grid {}x{} built from points", grid.width(), grid.height());
        Ok(grid)
    }

    /// Builds a grid from Bézier nodes and colours paired by index.
    pub fn from_bezier_points(
        width: usize,
        points: &[BezierPoint],
        colors: &[ColorRgb],
    ) -> MeshResult<Self> {
        check_parallel(width, points.len(), colors.len())?;
        let elements = points.iter().zip(colors).map(|(p, &c)| p.derive(c)).collect();
        let grid = Grid::from_row_major(width, elements)?;
        log::debug!("grid {}x{} built from bezier points", grid.width(), grid.height());
        Ok(grid)
    }

    /// Dispatches to [`from_points`](Self::from_points) or
    /// [`from_bezier_points`](Self::from_bezier_points).
    pub fn from_locations(
        width: usize,
        locations: &Locations,
        colors: &[ColorRgb],
    ) -> MeshResult<Self> {
        match locations {
            Locations::Points(points) => Self::from_points(width, points, colors),
            Locations::BezierPoints(points) => Self::from_bezier_points(width, points, colors),
        }
    }
}

/// Validates the shape before anything is allocated so no partial grid exists.
fn check_parallel(width: usize, locations: usize, colors: usize) -> MeshResult<usize> {
    if locations != colors {
        return Err(MeshError::shape(format!(
            "{locations} locations but {colors} colors"
        )));
    }
    derive_height(width, locations)
}
