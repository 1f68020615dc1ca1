//! Coordinate and colour types shared by the mesh model and the tessellator.
//!
//! Two coordinate frames exist:
//! - authoring space: unit square, origin top-left, +X right, +Y down
//! - render space: [-1, 1]², origin centred, +X right, +Y up
//!
//! Grid construction converts authoring input to render space once; everything
//! downstream (tangents, patches, vertices) lives in render space.

mod color;
mod transform;
mod vec2;

pub use color::{ColorRgb, ColorRgba};
pub use transform::{to_authoring_space, to_render_space, RENDER_SCALE, RENDER_TRANSLATE};
pub use vec2::Vec2;
