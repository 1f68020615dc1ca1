use crate::tessellate::TriangleMesh;

use super::RenderParams;

/// Everything the pipeline needs for one frame.
///
/// Borrowed from the session; valid until the next tick.
#[derive(Debug, Copy, Clone)]
pub struct MeshFrame<'a> {
    pub mesh: &'a TriangleMesh,
    pub params: &'a RenderParams,
    pub frame_index: u64,
    pub grid_width: usize,
    pub grid_height: usize,
}

/// Consumer of tessellated frames, implemented by the host's render pipeline.
pub trait FrameSink {
    fn present(&mut self, frame: &MeshFrame<'_>) -> anyhow::Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, frame: &MeshFrame<'_>) -> anyhow::Result<()> {
        (**self).present(frame)
    }
}
