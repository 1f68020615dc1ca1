//! Tessellation of a control-point grid into a dense triangle mesh.
//!
//! Each cell bounded by four neighbouring control points is a bicubic Hermite
//! patch for position and a bilinear patch for colour. A cell is sampled on an
//! `(n + 1) × (n + 1)` lattice and emitted as `n × n` quads of two triangles.
//!
//! Output order is cells row-major, then samples row-major inside a cell, so
//! identical input always yields identical buffers.

mod mesh;
mod patch;
mod tessellator;
mod vertex;

pub use mesh::TriangleMesh;
pub use patch::{hermite_basis, Patch};
pub use tessellator::{tessellate, tessellate_into};
pub use vertex::MeshVertex;
