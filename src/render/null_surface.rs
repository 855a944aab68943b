use crate::error::ScatterResult;
use crate::render::{RenderFrame, RenderSurface};

/// No-op surface used by tests and headless engine usage.
///
/// It still validates every frame so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub frames_applied: usize,
    pub last_command_count: usize,
}

impl RenderSurface for NullSurface {
    fn apply(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.frames_applied += 1;
        self.last_command_count = frame.len();
        Ok(())
    }
}
