use crate::ActiveChange;

/// Everything that can drive a [`crate::Carousel`].
///
/// Adapters translate toolkit events into these: button clicks become `Next`/`Prev`, indicator
/// clicks become `GoTo(i)`, pointer/touch events become the `Drag*` variants (client X in px),
/// and window resizes become `Resize` stamped with the adapter's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    Next,
    Prev,
    GoTo(usize),
    DragStart(f32),
    DragMove(f32),
    DragEnd(f32),
    Resize { now_ms: u64 },
}

/// What an adapter has to apply after an input.
///
/// All fields are "changed since last time"; an empty response needs no work.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    /// Slide and indicator active flags moved (or were re-confirmed).
    pub active: Option<ActiveChange>,
    /// New track translation in px.
    pub offset: Option<f32>,
    /// `Some(false)` suspends the track transition, `Some(true)` restores it.
    pub transition: Option<bool>,
    /// Call `layout_settled` on the next display refresh.
    pub request_frame: bool,
    /// The resize deadline was (re)armed; any previously scheduled timer is stale.
    pub arm_resize_timer: bool,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Folds a later response into this one. Later values win.
    pub fn merge(&mut self, later: Response) {
        self.active = match (self.active, later.active) {
            (Some(first), Some(last)) => Some(ActiveChange {
                from: first.from,
                to: last.to,
            }),
            (first, last) => last.or(first),
        };
        self.offset = later.offset.or(self.offset);
        self.transition = later.transition.or(self.transition);
        self.request_frame |= later.request_frame;
        self.arm_resize_timer |= later.arm_resize_timer;
    }
}
