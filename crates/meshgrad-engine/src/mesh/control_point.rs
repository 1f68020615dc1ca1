use crate::coords::{ColorRgb, Vec2};

/// One node of the coarse mesh, in render space.
///
/// `u_tangent` / `v_tangent` are the rates of change of position along the grid's
/// column and row axes. They only shape geometry; colour is never bent by them.
/// Zero tangents reduce the surrounding patches to flat bilinear cells.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ControlPoint {
    pub position: Vec2,
    pub color: ColorRgb,
    pub u_tangent: Vec2,
    pub v_tangent: Vec2,
}

impl ControlPoint {
    #[inline]
    pub const fn new(position: Vec2, color: ColorRgb, u_tangent: Vec2, v_tangent: Vec2) -> Self {
        Self {
            position,
            color,
            u_tangent,
            v_tangent,
        }
    }

    /// Control point without curvature (both tangents zero).
    #[inline]
    pub const fn flat(position: Vec2, color: ColorRgb) -> Self {
        Self::new(position, color, Vec2::zero(), Vec2::zero())
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.u_tangent == Vec2::zero() && self.v_tangent == Vec2::zero()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.color.is_finite()
            && self.u_tangent.is_finite()
            && self.v_tangent.is_finite()
    }
}
