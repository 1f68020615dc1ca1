//! Engine-wide defaults and host capabilities.

/// Defaults shared by sessions and render parameters.
#[derive(Debug, Copy, Clone)]
pub struct MeshGradientDefaults;

impl MeshGradientDefaults {
    /// Film-grain overlay strength forwarded to the render pipeline.
    pub const GRAIN_ALPHA: f32 = 0.05;
    /// Sub-cells per grid cell along each axis.
    pub const SUBDIVISIONS: usize = 18;
    /// Frame rate requested by a static (redraw-on-demand) session.
    pub const STATIC_FRAMES_PER_SECOND: u32 = 60;
    /// Animator frame rate when none is configured.
    pub const ANIMATED_FRAMES_PER_SECOND: u32 = 60;
}

/// What the host display reports about itself.
///
/// Only used to clamp requested frame rates; the engine never raises a rate
/// above `max_frames_per_second`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HostCapabilities {
    max_frames_per_second: u32,
}

impl HostCapabilities {
    /// `max_frames_per_second` is raised to 1 if zero.
    #[inline]
    pub fn new(max_frames_per_second: u32) -> Self {
        Self {
            max_frames_per_second: max_frames_per_second.max(1),
        }
    }

    #[inline]
    pub fn max_frames_per_second(self) -> u32 {
        self.max_frames_per_second
    }

    /// `min(requested, max_frames_per_second)`, never below 1.
    #[inline]
    pub fn clamp_frames_per_second(self, requested: u32) -> u32 {
        requested.min(self.max_frames_per_second).max(1)
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::new(60)
    }
}
