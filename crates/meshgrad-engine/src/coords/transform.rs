//! Authoring space → render space mapping.
//!
//! `render = authoring * (2, -2) + (-1, 1)`
//!
//! Tangents must be derived from points that were already transformed
//! (transform first, difference second); see `mesh::bezier`.

use super::Vec2;

/// Per-axis scale from authoring to render space.
pub const RENDER_SCALE: Vec2 = Vec2::new(2.0, -2.0);

/// Translation applied after [`RENDER_SCALE`].
pub const RENDER_TRANSLATE: Vec2 = Vec2::new(-1.0, 1.0);

/// Maps a point from the unit square (origin top-left, +Y down) to render space
/// ([-1, 1]², origin centred, +Y up).
#[inline]
pub fn to_render_space(p: Vec2) -> Vec2 {
    p.scale(RENDER_SCALE) + RENDER_TRANSLATE
}

/// Inverse of [`to_render_space`].
#[inline]
pub fn to_authoring_space(p: Vec2) -> Vec2 {
    (p - RENDER_TRANSLATE).unscale(RENDER_SCALE)
}
