use tracing::trace;

use crate::error::ScatterResult;
use crate::extensions::InteractionEvent;
use crate::render::{RenderFrame, RenderSurface};

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` owns the derived chart model (scales, density curves,
/// tessellation), the hover/brush state machines and the render surface that
/// receives one frame per handled event.
pub struct ScatterEngine<R: RenderSurface> {
    pub(super) surface: R,
    pub(super) core: EngineCore,
}

impl<R: RenderSurface> ScatterEngine<R> {
    /// Re-emits the full scene, including any active hover or brush overlay.
    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_scene_frame()?;
        self.apply_frame(&frame)?;
        self.emit_plugin_event(InteractionEvent::Rendered);
        Ok(())
    }

    pub(super) fn apply_frame(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        if frame.is_empty() {
            return Ok(());
        }
        self.surface.apply(frame)?;
        self.core.runtime.frames_emitted += 1;
        trace!(commands = frame.len(), "frame applied");
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> R {
        self.surface
    }
}
