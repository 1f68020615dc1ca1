//! Meshgrad engine crate.
//!
//! This crate turns a grid of coloured control points into a smooth-shaded
//! triangle mesh each frame, either from a fixed grid or from an animator.
//! GPU pipelines and window surfaces belong to the host.

pub mod config;
pub mod coords;
pub mod error;
pub mod mesh;
pub mod provider;
pub mod render;
pub mod session;
pub mod tessellate;
pub mod time;

pub mod logging;

pub use error::{MeshError, MeshResult};
