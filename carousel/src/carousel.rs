use core::cell::Cell;

use crate::debounce::{Debounce, RESIZE_DEBOUNCE_MS};
use crate::drag::DragState;
use crate::layout::center_delta;
use crate::{
    ActiveChange, ActiveSet, CarouselOptions, Indicators, Input, Layout, Response, Snapshot,
    SwipeDecision,
};

/// Work owed to the next display refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingFrame {
    /// Start-up: confirm the initial index with a full `go_to` once layout is ready.
    Confirm,
    /// Recenter the active slide against post-activation geometry.
    Center,
}

/// A headless carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, timers or clocks.
/// - Your adapter drives it with [`Input`]s and applies the returned [`Response`]s (active
///   classes, track transform, transition toggle).
/// - Geometry is read through [`Layout`] only when the adapter reports that layout has settled
///   (typically from a `requestAnimationFrame` callback).
///
/// For mounting, discovery and a frame/timer driven controller, see the `carousel-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    index: usize,
    offset: f32,
    drag: Option<DragState>,
    transition_enabled: bool,
    pending: Option<PendingFrame>,
    resize: Debounce,

    slides: ActiveSet,
    indicators: Indicators,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel centered on the middle slide (`slide_count / 2`).
    ///
    /// Returns `None` when there are no slides; such a carousel would be inert.
    ///
    /// The initial index is only marked active here. The first [`Self::layout_settled`] call
    /// confirms it with a full [`Self::go_to`], and the one after that centers it. Use
    /// [`Self::initial_response`] to render the starting state.
    pub fn new(options: CarouselOptions) -> Option<Self> {
        let count = options.slide_count;
        if count == 0 {
            cdebug!("Carousel::new: no slides, staying inert");
            return None;
        }
        let index = count / 2;
        let mut slides = ActiveSet::new(count);
        let mut indicators = Indicators::build(count, &*options.indicator_label);
        slides.activate(index);
        indicators.sync(index);
        cdebug!(slide_count = count, index, "Carousel::new");
        Some(Self {
            options,
            index,
            offset: 0.0,
            drag: None,
            transition_enabled: true,
            pending: Some(PendingFrame::Confirm),
            resize: Debounce::new(RESIZE_DEBOUNCE_MS),
            slides,
            indicators,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    /// Everything an adapter has to apply right after construction: the active flags, a reset
    /// track transform and a frame request.
    pub fn initial_response(&self) -> Response {
        Response {
            active: Some(ActiveChange {
                from: self.index,
                to: self.index,
            }),
            offset: Some(self.offset),
            transition: None,
            request_frame: self.pending.is_some(),
            arm_resize_timer: false,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current track translation in px.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn slides(&self) -> &ActiveSet {
        &self.slides
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slides.is_active(index)
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Whether a [`Self::layout_settled`] call is owed.
    pub fn needs_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending resize deadline, if a resize is being debounced.
    pub fn resize_deadline(&self) -> Option<u64> {
        self.resize.deadline_ms()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            slide_count: self.slide_count(),
            index: self.index,
            offset: self.offset,
            dragging: self.is_dragging(),
            transition_enabled: self.transition_enabled,
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn batched<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        let out = f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
        out
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batched(f);
    }

    /// The single state-transition entry point.
    pub fn dispatch(&mut self, input: Input) -> Response {
        ctrace!(?input, index = self.index, "Carousel::dispatch");
        self.batched(|c| match input {
            Input::Next => c.next(),
            Input::Prev => c.prev(),
            Input::GoTo(index) => c.go_to(index),
            Input::DragStart(x) => c.drag_start(x),
            Input::DragMove(x) => c.drag_move(x),
            Input::DragEnd(x) => c.drag_end(x),
            Input::Resize { now_ms } => c.resize(now_ms),
        })
    }

    /// Activates `index` (clamped into range) and schedules a recenter for the next frame.
    pub fn go_to(&mut self, index: usize) -> Response {
        let to = index.min(self.slide_count() - 1);
        let from = self.index;
        self.index = to;
        self.slides.activate(to);
        self.indicators.sync(to);
        self.pending.get_or_insert(PendingFrame::Center);
        cdebug!(from, to, requested = index, "Carousel::go_to");
        self.notify();
        Response {
            active: Some(ActiveChange { from, to }),
            request_frame: true,
            ..Response::default()
        }
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> Response {
        let n = self.slide_count();
        self.go_to((self.index + 1) % n)
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> Response {
        let n = self.slide_count();
        self.go_to((self.index + n - 1) % n)
    }

    /// Runs the work deferred to this frame. Call once per requested display refresh, after the
    /// previous response's active flags have been applied.
    pub fn layout_settled(&mut self, layout: &impl Layout) -> Response {
        let Some(pending) = self.pending.take() else {
            return Response::default();
        };
        ctrace!(?pending, index = self.index, "Carousel::layout_settled");
        self.batched(|c| match pending {
            PendingFrame::Confirm => c.go_to(c.index),
            PendingFrame::Center => c.center_on_active(layout),
        })
    }

    /// Shifts the current offset so that the active slide's center lines up with the viewport's.
    ///
    /// The correction is relative to whatever offset is applied right now (including a drag
    /// offset), so calling it again without a layout change yields a zero delta.
    pub fn center_on_active(&mut self, layout: &impl Layout) -> Response {
        let Some(slide) = layout.slide(self.index) else {
            cwarn!(index = self.index, "center_on_active: active slide has no layout");
            return Response::default();
        };
        let delta = center_delta(layout.viewport(), slide);
        self.set_offset(self.offset + delta);
        Response {
            offset: Some(self.offset),
            ..Response::default()
        }
    }

    fn set_offset(&mut self, offset: f32) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.notify();
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        if self.transition_enabled == enabled {
            return;
        }
        self.transition_enabled = enabled;
        self.notify();
    }

    fn drag_start(&mut self, x: f32) -> Response {
        self.drag = Some(DragState::new(x, self.offset));
        self.set_transition_enabled(false);
        ctrace!(x, offset = self.offset, "drag_start");
        self.notify();
        Response {
            transition: Some(false),
            ..Response::default()
        }
    }

    fn drag_move(&mut self, x: f32) -> Response {
        let Some(drag) = self.drag else {
            return Response::default();
        };
        self.set_offset(drag.offset_at(x));
        Response {
            offset: Some(self.offset),
            ..Response::default()
        }
    }

    fn drag_end(&mut self, x: f32) -> Response {
        let Some(drag) = self.drag.take() else {
            return Response::default();
        };
        self.set_transition_enabled(true);
        self.notify();

        let dx = drag.displacement(x);
        let decision = SwipeDecision::from_displacement(dx);
        cdebug!(dx, ?decision, index = self.index, "drag_end");

        let mut response = Response {
            transition: Some(true),
            ..Response::default()
        };
        response.merge(match decision {
            SwipeDecision::Next => self.next(),
            SwipeDecision::Prev => self.prev(),
            SwipeDecision::SnapBack => self.go_to(self.index),
        });
        response
    }

    fn resize(&mut self, now_ms: u64) -> Response {
        self.resize.arm(now_ms);
        ctrace!(now_ms, deadline = self.resize.deadline_ms(), "resize armed");
        Response {
            arm_resize_timer: true,
            ..Response::default()
        }
    }

    /// Advances clocks. Fires the debounced resize recenter once its quiet period has elapsed.
    pub fn update(&mut self, now_ms: u64) -> Response {
        if !self.resize.poll(now_ms) {
            return Response::default();
        }
        cdebug!(now_ms, index = self.index, "resize settled");
        self.batched(|c| c.go_to(c.index))
    }

    /// Fires a pending resize recenter immediately.
    ///
    /// For adapters whose own timer (e.g. `setTimeout`) already waited out the quiet period.
    pub fn flush_resize(&mut self) -> Response {
        if !self.resize.take() {
            return Response::default();
        }
        cdebug!(index = self.index, "resize flushed");
        self.batched(|c| c.go_to(c.index))
    }
}
