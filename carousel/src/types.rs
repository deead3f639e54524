use crate::Input;

/// Horizontal extent of a box in client coordinates (e.g. `getBoundingClientRect()`).
///
/// Only the horizontal axis matters for centering; adapters drop `top`/`height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f32,
    pub width: f32,
}

impl Bounds {
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Keys the carousel reacts to while focus is inside its root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    pub fn input(self) -> Option<Input> {
        match self {
            Self::ArrowLeft => Some(Input::Prev),
            Self::ArrowRight => Some(Input::Next),
            Self::Other => None,
        }
    }
}

/// Where a released drag commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDecision {
    Next,
    Prev,
    SnapBack,
}

/// A change of the active slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveChange {
    pub from: usize,
    pub to: usize,
}

/// A lightweight snapshot of the carousel state, for renderers and tests.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub slide_count: usize,
    pub index: usize,
    pub offset: f32,
    pub dragging: bool,
    pub transition_enabled: bool,
}
