use crate::config::MeshGradientDefaults;
use crate::coords::ColorRgba;
use crate::error::{MeshError, MeshResult};

/// Colour space the pipeline should interpret vertex colours in.
///
/// Forwarded untouched; conversion is the pipeline's job.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ColorSpace {
    /// The display's native RGB space.
    #[default]
    Device,
    /// Linear sRGB, for perceptually smoother blends.
    Perceptual,
}

/// Per-session parameters consumed by tessellation (`subdivisions`) and the
/// render pipeline (everything else).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub grain_alpha: f32,
    pub subdivisions: usize,
    pub background: ColorRgba,
    pub color_space: ColorSpace,
}

impl RenderParams {
    /// Checks what this crate consumes itself; pass-through values are not inspected.
    pub fn validate(&self) -> MeshResult<()> {
        if self.subdivisions < 1 {
            return Err(MeshError::parameter(format!(
                "subdivisions must be at least 1, got {}",
                self.subdivisions
            )));
        }
        Ok(())
    }

    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    pub fn with_grain_alpha(mut self, grain_alpha: f32) -> Self {
        self.grain_alpha = grain_alpha;
        self
    }

    pub fn with_background(mut self, background: ColorRgba) -> Self {
        self.background = background;
        self
    }

    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            grain_alpha: MeshGradientDefaults::GRAIN_ALPHA,
            subdivisions: MeshGradientDefaults::SUBDIVISIONS,
            background: ColorRgba::black(),
            color_space: ColorSpace::Device,
        }
    }
}
