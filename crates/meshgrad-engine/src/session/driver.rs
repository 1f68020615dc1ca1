use std::sync::Arc;
use std::time::Duration;

use crate::config::{HostCapabilities, MeshGradientDefaults};
use crate::error::MeshResult;
use crate::mesh::{ControlPoint, Grid};
use crate::provider::{AnimatorConfiguration, MeshDataProvider, MeshGradientState};
use crate::render::{FrameSink, MeshFrame, RenderParams};
use crate::tessellate::{tessellate_into, TriangleMesh};

/// One rendering session.
///
/// Each tick runs synchronously: take the provider's grid snapshot, tessellate
/// it into a reused mesh buffer, and hand the result to the caller or a sink.
/// Nothing blocks and nothing is retried; a failed tick leaves the previous
/// mesh in place.
#[derive(Debug)]
pub struct MeshSession {
    provider: MeshDataProvider,
    params: RenderParams,
    host: HostCapabilities,
    preferred_fps: u32,

    mesh: TriangleMesh,
    frame_index: u64,
    redraw_pending: bool,
}

impl MeshSession {
    pub fn new(
        state: &MeshGradientState,
        params: RenderParams,
        host: HostCapabilities,
    ) -> MeshResult<Self> {
        params.validate()?;

        let mut session = Self {
            provider: state.create_data_provider(),
            params,
            host,
            preferred_fps: MeshGradientDefaults::STATIC_FRAMES_PER_SECOND,
            mesh: TriangleMesh::new(),
            frame_index: 0,
            redraw_pending: true,
        };
        session.preferred_fps = session.apply_frame_rate_policy();
        Ok(session)
    }

    #[inline]
    pub fn provider(&self) -> &MeshDataProvider {
        &self.provider
    }

    #[inline]
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    #[inline]
    pub fn host(&self) -> HostCapabilities {
        self.host
    }

    /// Frame rate the host should drive this session at.
    #[inline]
    pub fn preferred_frames_per_second(&self) -> u32 {
        self.preferred_fps
    }

    /// Static sessions only draw on demand.
    #[inline]
    pub fn is_paused(&self) -> bool {
        matches!(self.provider, MeshDataProvider::Static(_))
    }

    /// True for animated sessions, and for static sessions with an undrawn grid.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        !self.is_paused() || self.redraw_pending
    }

    /// Index the next produced frame will carry.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Mesh produced by the last successful tick.
    #[inline]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Produces a frame, timing animation by the provider's own clock.
    pub fn tick(&mut self) -> MeshResult<MeshFrame<'_>> {
        let grid = self.provider.current_grid();
        self.frame_from(grid)
    }

    /// Produces a frame `dt` after the previous one (host-supplied timing).
    pub fn tick_after(&mut self, dt: Duration) -> MeshResult<MeshFrame<'_>> {
        let grid = self.provider.grid_after(dt);
        self.frame_from(grid)
    }

    /// `tick()` followed by `sink.present()`.
    pub fn render_to<S>(&mut self, sink: &mut S) -> anyhow::Result<()>
    where
        S: FrameSink + ?Sized,
    {
        let frame = self.tick()?;
        sink.present(&frame)
    }

    /// `tick_after(dt)` followed by `sink.present()`.
    pub fn render_after<S>(&mut self, dt: Duration, sink: &mut S) -> anyhow::Result<()>
    where
        S: FrameSink + ?Sized,
    {
        let frame = self.tick_after(dt)?;
        sink.present(&frame)
    }

    /// Applies new caller parameters to the existing provider.
    ///
    /// - animated state on an animated session: reconfigures the animator
    ///   (initial grid is kept)
    /// - static state on a static session: publishes the grid and schedules a redraw
    /// - otherwise `StateMismatch`, and nothing changes
    ///
    /// `params` replace the current ones on success.
    pub fn update(&mut self, state: &MeshGradientState, params: RenderParams) -> MeshResult<()> {
        params.validate()?;

        match state {
            MeshGradientState::Animated { configuration, .. } => {
                let clamped = self.clamp_configuration(*configuration);
                self.provider.set_animator_configuration(clamped)?;
                self.preferred_fps = clamped.frames_per_second();
            }
            MeshGradientState::Static { grid } => {
                self.provider.set_grid(grid.clone())?;
                self.preferred_fps = self
                    .host
                    .clamp_frames_per_second(MeshGradientDefaults::STATIC_FRAMES_PER_SECOND);
                self.redraw_pending = true;
            }
        }

        self.params = params;
        Ok(())
    }

    /// Discards the provider and builds a new one from `state`.
    pub fn replace_state(&mut self, state: &MeshGradientState) {
        log::debug!("replacing {} provider with {}", self.provider.kind(), state.kind());
        self.provider = state.create_data_provider();
        self.preferred_fps = self.apply_frame_rate_policy();
        self.redraw_pending = true;
    }

    fn frame_from(&mut self, grid: Arc<Grid<ControlPoint>>) -> MeshResult<MeshFrame<'_>> {
        tessellate_into(&grid, self.params.subdivisions, &mut self.mesh)?;
        self.redraw_pending = false;

        let frame_index = self.frame_index;
        self.frame_index = self.frame_index.wrapping_add(1);

        Ok(MeshFrame {
            mesh: &self.mesh,
            params: &self.params,
            frame_index,
            grid_width: grid.width(),
            grid_height: grid.height(),
        })
    }

    fn apply_frame_rate_policy(&self) -> u32 {
        match &self.provider {
            MeshDataProvider::Animated(animator) => {
                let clamped = self.clamp_configuration(animator.configuration());
                animator.set_configuration(clamped);
                clamped.frames_per_second()
            }
            MeshDataProvider::Static(_) => self
                .host
                .clamp_frames_per_second(MeshGradientDefaults::STATIC_FRAMES_PER_SECOND),
        }
    }

    fn clamp_configuration(&self, requested: AnimatorConfiguration) -> AnimatorConfiguration {
        let clamped = requested.clamped_to(self.host);
        if clamped != requested {
            log::warn!(
                "requested {} fps exceeds host maximum, clamped to {}",
                requested.frames_per_second(),
                clamped.frames_per_second()
            );
        }
        clamped
    }
}
