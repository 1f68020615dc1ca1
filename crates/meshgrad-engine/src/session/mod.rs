//! Per-tick driver tying a provider, the tessellator and the host's sink together.
//!
//! Intended usage:
//! - one `MeshSession` per rendered surface
//! - call `tick()` (or `render_to()`) from the display-refresh callback
//! - call `update()` when caller parameters change, `replace_state()` to switch
//!   between animated and static

mod driver;

pub use driver::MeshSession;
