//! Input model: pointer sources and the pan gesture state machine.
//!
//! Mouse and touch drive the same two-state machine. A gesture starts on a
//! pointer-down over empty space and lasts until the up event from the same
//! device; events from the other device neither pan nor end it. Touch input only ever reads the
//! first active touch point.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Device that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Internal state for the pan state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the scene.
    Dragging {
        /// Pointer position minus scene offset at gesture start.
        anchor: Point,
        /// Device that owns the gesture.
        source: PointerSource,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Anchor of the active drag, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Dragging { anchor, .. } => Some(*anchor),
            Self::Idle => None,
        }
    }

    /// Anchor of the active drag, but only when `source` owns it.
    #[must_use]
    pub fn anchor_from(&self, source: PointerSource) -> Option<Point> {
        match self {
            Self::Dragging { anchor, source: owner } if *owner == source => Some(*anchor),
            _ => None,
        }
    }

    /// True while a drag started by `source` is in progress.
    #[must_use]
    pub fn is_dragged_by(&self, source: PointerSource) -> bool {
        self.anchor_from(source).is_some()
    }
}

/// The touch point that drives a gesture: the first one reported.
#[must_use]
pub fn primary_touch(touches: &[Point]) -> Option<Point> {
    touches.first().copied()
}
