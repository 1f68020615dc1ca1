//! Hand-off to the external render pipeline.
//!
//! This crate stops at CPU data: a tessellated mesh plus pass-through
//! parameters. Pipelines, devices and draw calls live in the `FrameSink`
//! implementation supplied by the host.
//!
//! Convention:
//! - vertex positions are already in render space ([-1, 1]², +Y up)
//! - vertex colours are linear RGB
//! - vertices use `tessellate::MeshVertex::layout()`, indices are `u32` triangle lists

mod params;
mod sink;

pub use params::{ColorSpace, RenderParams};
pub use sink::{FrameSink, MeshFrame};
