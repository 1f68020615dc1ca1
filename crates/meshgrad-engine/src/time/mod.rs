//! Time subsystem.
//!
//! The animator owns one `FrameClock` and asks it for the wall-clock delta at
//! every tick. Hosts that already know their frame timestamps bypass the clock
//! and pass the delta directly.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
