use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::config::{HostCapabilities, MeshGradientDefaults};
use crate::error::{MeshError, MeshResult};

/// Animator settings that may change while the animation runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AnimatorConfiguration {
    frames_per_second: u32,
}

impl AnimatorConfiguration {
    /// Fails with `Parameter` when `frames_per_second` is zero.
    pub fn new(frames_per_second: u32) -> MeshResult<Self> {
        if frames_per_second == 0 {
            return Err(MeshError::parameter("frames per second must be positive"));
        }
        Ok(Self { frames_per_second })
    }

    #[inline]
    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    /// Target time between two published frames.
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second))
    }

    /// Lowers the frame rate to what the host supports. Never raises it, never below 1.
    #[inline]
    pub fn clamped_to(self, host: HostCapabilities) -> Self {
        Self {
            frames_per_second: host.clamp_frames_per_second(self.frames_per_second).max(1),
        }
    }
}

impl Default for AnimatorConfiguration {
    fn default() -> Self {
        Self {
            frames_per_second: MeshGradientDefaults::ANIMATED_FRAMES_PER_SECOND,
        }
    }
}

/// Shared configuration cell.
///
/// One writer (the caller) and one reader (the animator, at the start of each
/// tick). Clones refer to the same cell. A write lands whole between two reads.
#[derive(Debug, Clone, Default)]
pub struct AnimatorConfigHandle {
    inner: Arc<RwLock<AnimatorConfiguration>>,
}

impl AnimatorConfigHandle {
    pub fn new(configuration: AnimatorConfiguration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(configuration)),
        }
    }

    /// Copy of the current configuration.
    pub fn get(&self) -> AnimatorConfiguration {
        // The value is Copy and written in one assignment; a poisoned lock still holds a whole value.
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, configuration: AnimatorConfiguration) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = configuration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frames_per_second_is_rejected() {
        assert!(matches!(AnimatorConfiguration::new(0), Err(MeshError::Parameter(_))));
    }

    #[test]
    fn clamp_only_lowers() {
        let c = AnimatorConfiguration::new(120).unwrap();
        assert_eq!(c.clamped_to(HostCapabilities::new(60)).frames_per_second(), 60);

        let c = AnimatorConfiguration::new(30).unwrap();
        assert_eq!(c.clamped_to(HostCapabilities::new(120)).frames_per_second(), 30);
    }

    #[test]
    fn clamped_configuration_keeps_a_finite_interval() {
        let c = AnimatorConfiguration::default().clamped_to(HostCapabilities::new(0));
        assert_eq!(c.frames_per_second(), 1);
        assert_eq!(c.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn frame_interval_is_reciprocal() {
        let c = AnimatorConfiguration::new(50).unwrap();
        assert_eq!(c.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn handle_clones_share_the_cell() {
        let handle = AnimatorConfigHandle::default();
        let writer = handle.clone();
        writer.set(AnimatorConfiguration::new(24).unwrap());
        assert_eq!(handle.get().frames_per_second(), 24);
    }

    #[test]
    fn handle_writes_from_another_thread_are_seen() {
        let handle = AnimatorConfigHandle::default();
        let writer = handle.clone();
        std::thread::spawn(move || writer.set(AnimatorConfiguration::new(15).unwrap()))
            .join()
            .unwrap();
        assert_eq!(handle.get().frames_per_second(), 15);
    }
}
