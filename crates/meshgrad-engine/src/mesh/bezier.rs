use crate::coords::{to_render_space, ColorRgb, Vec2};

use super::ControlPoint;

/// Authoring-space node with Bézier handles on both grid axes.
///
/// All coordinates are in the unit square (origin top-left, +Y down).
/// `leading`/`trailing` are the handles along the row (u) axis, `top`/`bottom`
/// along the column (v) axis. Only consumed by [`BezierPoint::derive`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BezierPoint {
    pub position: Vec2,
    pub leading_control_point: Vec2,
    pub trailing_control_point: Vec2,
    pub top_control_point: Vec2,
    pub bottom_control_point: Vec2,
}

impl BezierPoint {
    #[inline]
    pub const fn new(
        position: Vec2,
        leading_control_point: Vec2,
        trailing_control_point: Vec2,
        top_control_point: Vec2,
        bottom_control_point: Vec2,
    ) -> Self {
        Self {
            position,
            leading_control_point,
            trailing_control_point,
            top_control_point,
            bottom_control_point,
        }
    }

    /// Node whose handles all sit on the anchor; derives to zero tangents.
    #[inline]
    pub const fn anchored(position: Vec2) -> Self {
        Self::new(position, position, position, position, position)
    }

    /// Node with handles mirrored around the anchor.
    ///
    /// `leading = position + u_handle`, `trailing = position - u_handle`,
    /// `bottom = position + v_handle`, `top = position - v_handle`.
    #[inline]
    pub fn symmetric(position: Vec2, u_handle: Vec2, v_handle: Vec2) -> Self {
        Self::new(
            position,
            position + u_handle,
            position - u_handle,
            position - v_handle,
            position + v_handle,
        )
    }

    /// Converts this node and its colour into a render-space [`ControlPoint`].
    ///
    /// Anchor and handles are transformed first; tangents are the chords between
    /// opposing transformed handles:
    /// - `u_tangent = T(leading) - T(trailing)`
    /// - `v_tangent = T(bottom) - T(top)`
    ///
    /// No neighbour information is used, so tangents of adjacent nodes are only
    /// C¹-consistent when the caller supplies consistent handles.
    pub fn derive(&self, color: ColorRgb) -> ControlPoint {
        let position = to_render_space(self.position);
        let leading = to_render_space(self.leading_control_point);
        let trailing = to_render_space(self.trailing_control_point);
        let top = to_render_space(self.top_control_point);
        let bottom = to_render_space(self.bottom_control_point);

        ControlPoint::new(position, color, leading - trailing, bottom - top)
    }
}
