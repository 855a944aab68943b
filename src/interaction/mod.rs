//! Hover and brush state machines.
//!
//! These are plain state holders with transition methods; the engine drives
//! them from pointer events and turns transitions into render frames.

mod selection;

use serde::{Deserialize, Serialize};

use crate::core::BrushRange;

pub use selection::{Selection, classify};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoverState {
    Idle,
    Hovering {
        index: usize,
        cursor_x: f64,
        cursor_y: f64,
    },
}

impl HoverState {
    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering { index, .. } => Some(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushState {
    Unbrushed,
    Brushing(BrushRange),
}

impl BrushState {
    #[must_use]
    pub fn range(self) -> Option<BrushRange> {
        match self {
            BrushState::Unbrushed => None,
            BrushState::Brushing(range) => Some(range),
        }
    }
}

/// Result of a hover-enter transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTransition {
    /// Point whose highlight must be torn down first.
    pub previous: Option<usize>,
    pub current: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    hover: HoverState,
    brush: BrushState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hover: HoverState::Idle,
            brush: BrushState::Unbrushed,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn brush(self) -> BrushState {
        self.brush
    }

    /// Enters the cell of `index`. Any previous highlight is replaced, never
    /// kept alongside.
    pub fn on_cell_enter(&mut self, index: usize, cursor_x: f64, cursor_y: f64) -> HoverTransition {
        let previous = self.hover.hovered_index();
        self.hover = HoverState::Hovering {
            index,
            cursor_x,
            cursor_y,
        };
        HoverTransition {
            previous,
            current: index,
        }
    }

    /// Leaves the cell of `index`. Returns `false` for a stale leave, i.e. one
    /// for a cell that is not the hovered one.
    pub fn on_cell_leave(&mut self, index: usize) -> bool {
        if self.hover.hovered_index() != Some(index) {
            return false;
        }
        self.hover = HoverState::Idle;
        true
    }

    /// Clears hover regardless of which cell is active. Returns the cleared index.
    pub fn clear_hover(&mut self) -> Option<usize> {
        let previous = self.hover.hovered_index();
        self.hover = HoverState::Idle;
        previous
    }

    pub fn on_brush_move(&mut self, range: BrushRange) {
        self.brush = BrushState::Brushing(range);
    }

    /// Returns `true` when a brush was active.
    pub fn on_brush_leave(&mut self) -> bool {
        let was_brushing = self.brush != BrushState::Unbrushed;
        self.brush = BrushState::Unbrushed;
        was_brushing
    }
}
