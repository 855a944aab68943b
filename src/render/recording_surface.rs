use crate::error::ScatterResult;
use crate::render::{RenderFrame, RenderSurface};

/// Surface that keeps every validated frame, for inspecting emitted commands.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<RenderFrame>,
}

impl RecordingSurface {
    #[must_use]
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}
