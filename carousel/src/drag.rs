use crate::SwipeDecision;

/// Net horizontal displacement (px) a released drag must exceed to change slides.
pub const SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Anchor captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    pub anchor_x: f32,
    pub anchor_offset: f32,
}

impl DragState {
    pub fn new(anchor_x: f32, anchor_offset: f32) -> Self {
        Self {
            anchor_x,
            anchor_offset,
        }
    }

    /// Offset that tracks the pointer 1:1.
    pub fn offset_at(&self, x: f32) -> f32 {
        self.anchor_offset + (x - self.anchor_x)
    }

    pub fn displacement(&self, x: f32) -> f32 {
        x - self.anchor_x
    }
}

impl SwipeDecision {
    /// Dragging left (negative) past the threshold advances, right goes back.
    pub fn from_displacement(dx: f32) -> Self {
        if dx < -SWIPE_THRESHOLD_PX {
            Self::Next
        } else if dx > SWIPE_THRESHOLD_PX {
            Self::Prev
        } else {
            Self::SnapBack
        }
    }
}
