use crate::coords::{ColorRgb, Vec2};
use crate::mesh::{ControlPoint, Grid};

/// Cubic Hermite basis `[h00, h01, h10, h11]` at `s`.
///
/// `h00`/`h01` weight the values at 0 and 1, `h10`/`h11` the tangents at 0 and 1.
#[inline]
pub fn hermite_basis(s: f32) -> [f32; 4] {
    let s2 = s * s;
    let s3 = s2 * s;
    [
        2.0 * s3 - 3.0 * s2 + 1.0,
        -2.0 * s3 + 3.0 * s2,
        s3 - 2.0 * s2 + s,
        s3 - s2,
    ]
}

/// One grid cell, ready for evaluation.
///
/// Position is the bilinear surface through the four corners plus a Hermite
/// offset driven by the node tangents:
///
/// ```text
///         |  0    0   V00  V01 |
///     T = |  0    0   V10  V11 |      P(s, t) = B(s, t) + H(s) · T · H(t)ᵀ
///         | U00  U01   0    0  |
///         | U10  U11   0    0  |
/// ```
///
/// where `B` is bilinear in the corners `Pij` at `(x + i, y + j)` and `U`/`V`
/// are their tangents. This is the bicubic Hermite patch whose edge tangents
/// are the edge chord plus the node tangent, so zero tangents give exactly the
/// bilinear cell. Colour is plain bilinear in `(s, t)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Patch {
    corners: [Vec2; 4],
    tangents: [[Vec2; 4]; 4],
    colors: [ColorRgb; 4],
}

impl Patch {
    /// Builds the patch whose top-left corner is control point `(x, y)`.
    ///
    /// `x + 1` and `y + 1` must be inside the grid.
    pub fn from_grid(grid: &Grid<ControlPoint>, x: usize, y: usize) -> Self {
        Self::from_corners(
            &grid[(x, y)],
            &grid[(x + 1, y)],
            &grid[(x, y + 1)],
            &grid[(x + 1, y + 1)],
        )
    }

    pub fn from_corners(
        p00: &ControlPoint,
        p10: &ControlPoint,
        p01: &ControlPoint,
        p11: &ControlPoint,
    ) -> Self {
        let zero = Vec2::zero();
        Self {
            corners: [p00.position, p10.position, p01.position, p11.position],
            tangents: [
                [zero, zero, p00.v_tangent, p01.v_tangent],
                [zero, zero, p10.v_tangent, p11.v_tangent],
                [p00.u_tangent, p01.u_tangent, zero, zero],
                [p10.u_tangent, p11.u_tangent, zero, zero],
            ],
            colors: [p00.color, p10.color, p01.color, p11.color],
        }
    }

    /// Position at `(s, t)` for precomputed bases `bu = hermite_basis(s)`, `bv = hermite_basis(t)`.
    #[inline]
    pub fn position_with(&self, s: f32, t: f32, bu: &[f32; 4], bv: &[f32; 4]) -> Vec2 {
        let mut offset = Vec2::zero();
        for (row, &wu) in self.tangents.iter().zip(bu) {
            let mut along_v = Vec2::zero();
            for (&g, &wv) in row.iter().zip(bv) {
                along_v += g * wv;
            }
            offset += along_v * wu;
        }
        self.bilinear_position(s, t) + offset
    }

    #[inline]
    pub fn position(&self, s: f32, t: f32) -> Vec2 {
        self.position_with(s, t, &hermite_basis(s), &hermite_basis(t))
    }

    #[inline]
    fn bilinear_position(&self, s: f32, t: f32) -> Vec2 {
        let [p00, p10, p01, p11] = self.corners;
        p00 * ((1.0 - s) * (1.0 - t)) + p10 * (s * (1.0 - t)) + p01 * ((1.0 - s) * t) + p11 * (s * t)
    }

    /// `(1-s)(1-t)·C00 + s(1-t)·C10 + (1-s)t·C01 + st·C11`
    #[inline]
    pub fn color(&self, s: f32, t: f32) -> ColorRgb {
        let [c00, c10, c01, c11] = self.colors;
        c00 * ((1.0 - s) * (1.0 - t)) + c10 * (s * (1.0 - t)) + c01 * ((1.0 - s) * t) + c11 * (s * t)
    }
}
