//! A headless carousel: navigation state, indicator sync, viewport centering and swipe dragging.
//!
//! For adapter-level utilities (markup, mounting, frame/timer driving, DOM bindings), see the
//! `carousel-adapter` crate.
//!
//! The carousel is a single state machine consuming [`Input`]s and producing [`Response`]s.
//! It is UI-agnostic. A GUI/web layer is expected to provide:
//! - input events (buttons, keys, indicator clicks, pointer/touch X, resizes with a clock)
//! - a "layout settled" callback (e.g. `requestAnimationFrame`) with viewport and slide
//!   geometry through [`Layout`]
//! - application of the returned active flags, track offset and transition toggle
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod active;
mod carousel;
mod debounce;
mod drag;
mod indicators;
mod input;
mod layout;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use active::ActiveSet;
pub use carousel::Carousel;
pub use debounce::{Debounce, RESIZE_DEBOUNCE_MS};
pub use drag::{DragState, SWIPE_THRESHOLD_PX};
pub use indicators::{Indicator, Indicators};
pub use input::{Input, Response};
pub use layout::{Layout, center_delta};
pub use options::{CarouselOptions, IndicatorLabel, OnChangeCallback, default_indicator_label};
pub use types::{ActiveChange, Bounds, Key, Snapshot, SwipeDecision};
