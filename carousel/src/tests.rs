use crate::*;

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// A track of equally sized slides laid out left to right inside a viewport.
///
/// Slide boxes follow the carousel's current offset, like `getBoundingClientRect()` would after
/// the transform is applied. The active slide can be scaled around its center.
#[derive(Clone, Copy, Debug)]
struct Stage {
    viewport: Bounds,
    slide_width: f32,
    gap: f32,
    active_scale: f32,
}

impl Stage {
    fn new() -> Self {
        Self {
            viewport: Bounds::new(0.0, 400.0),
            slide_width: 100.0,
            gap: 20.0,
            active_scale: 1.0,
        }
    }

    fn frame(&self, c: &Carousel) -> Frame {
        let slides = (0..c.slide_count())
            .map(|i| {
                let left = self.viewport.left
                    + c.offset()
                    + i as f32 * (self.slide_width + self.gap);
                if c.is_slide_active(i) {
                    let width = self.slide_width * self.active_scale;
                    Bounds::new(left - (width - self.slide_width) / 2.0, width)
                } else {
                    Bounds::new(left, self.slide_width)
                }
            })
            .collect();
        Frame {
            viewport: self.viewport,
            slides,
        }
    }

    /// Offset that centers slide `index`.
    fn centered_offset(&self, index: usize) -> f32 {
        self.viewport.width / 2.0
            - index as f32 * (self.slide_width + self.gap)
            - self.slide_width / 2.0
    }
}

struct Frame {
    viewport: Bounds,
    slides: Vec<Bounds>,
}

impl Layout for Frame {
    fn viewport(&self) -> Bounds {
        self.viewport
    }

    fn slide(&self, index: usize) -> Option<Bounds> {
        self.slides.get(index).copied()
    }
}

fn carousel(n: usize) -> Carousel {
    Carousel::new(CarouselOptions::new(n)).unwrap()
}

/// Runs frames until nothing more is owed.
fn settle(c: &mut Carousel, stage: &Stage) {
    for _ in 0..4 {
        if !c.needs_frame() {
            return;
        }
        let frame = stage.frame(c);
        c.layout_settled(&frame);
    }
    panic!("carousel kept requesting frames");
}

fn assert_single_active(c: &Carousel, index: usize) {
    assert_eq!(c.index(), index);
    assert_eq!(c.slides().active_count(), 1);
    assert!(c.is_slide_active(index));
    assert_eq!(c.indicators().active(), Some(index));
    for i in 0..c.slide_count() {
        assert_eq!(c.indicators().is_active(i), i == index);
    }
}

#[test]
fn starts_on_middle_slide() {
    assert_eq!(carousel(5).index(), 2);
    assert_eq!(carousel(4).index(), 2);
    assert_eq!(carousel(1).index(), 0);
    assert_eq!(carousel(2).index(), 1);
    assert_single_active(&carousel(5), 2);
}

#[test]
fn zero_slides_is_inert() {
    assert!(Carousel::new(CarouselOptions::new(0)).is_none());
}

#[test]
fn initial_response_resets_track_and_requests_frame() {
    let c = carousel(5);
    let r = c.initial_response();
    assert_eq!(r.active, Some(ActiveChange { from: 2, to: 2 }));
    assert_eq!(r.offset, Some(0.0));
    assert!(r.request_frame);
    assert!(c.transition_enabled());
}

#[test]
fn startup_confirms_then_centers() {
    let stage = Stage::new();
    let mut c = carousel(5);

    let first = c.layout_settled(&stage.frame(&c));
    assert_eq!(first.active, Some(ActiveChange { from: 2, to: 2 }));
    assert!(first.request_frame);
    assert_eq!(first.offset, None);
    assert_eq!(c.offset(), 0.0);

    let second = c.layout_settled(&stage.frame(&c));
    assert_eq!(second.offset, Some(stage.centered_offset(2)));
    assert!(!c.needs_frame());

    let idle = c.layout_settled(&stage.frame(&c));
    assert!(idle.is_empty());
}

#[test]
fn go_to_clamps_and_keeps_one_active() {
    let mut c = carousel(5);
    for i in 0..5 {
        c.go_to(i);
        assert_single_active(&c, i);
    }
    let r = c.go_to(99);
    assert_eq!(r.active, Some(ActiveChange { from: 4, to: 4 }));
    assert_single_active(&c, 4);

    c.dispatch(Input::GoTo(usize::MAX));
    assert_single_active(&c, 4);
}

#[test]
fn next_and_prev_wrap() {
    let mut c = carousel(4);
    c.go_to(3);
    c.next();
    assert_single_active(&c, 0);
    c.prev();
    assert_single_active(&c, 3);
    c.prev();
    assert_single_active(&c, 2);

    let mut single = carousel(1);
    single.next();
    assert_eq!(single.index(), 0);
    single.prev();
    assert_eq!(single.index(), 0);
}

#[test]
fn navigation_requests_a_frame_and_centers_there() {
    let stage = Stage::new();
    let mut c = carousel(5);
    settle(&mut c, &stage);

    let r = c.dispatch(Input::Next);
    assert!(r.request_frame);
    assert_eq!(r.offset, None);
    assert_eq!(c.offset(), stage.centered_offset(2));

    settle(&mut c, &stage);
    assert_eq!(c.offset(), stage.centered_offset(3));
}

#[test]
fn several_navigations_in_one_frame_center_on_latest() {
    let stage = Stage::new();
    let mut c = carousel(5);
    settle(&mut c, &stage);

    c.dispatch(Input::Next);
    c.dispatch(Input::Next);
    c.dispatch(Input::GoTo(0));

    let r = c.layout_settled(&stage.frame(&c));
    assert_eq!(r.offset, Some(stage.centered_offset(0)));
    assert!(!c.needs_frame());
}

#[test]
fn centering_is_idempotent() {
    let stage = Stage::new();
    let mut c = carousel(7);
    c.go_to(5);

    c.center_on_active(&stage.frame(&c));
    let once = c.offset();
    c.center_on_active(&stage.frame(&c));
    assert_eq!(c.offset(), once);
    assert_eq!(once, stage.centered_offset(5));
}

#[test]
fn centering_uses_post_activation_geometry() {
    let mut stage = Stage::new();
    stage.active_scale = 1.5;
    let mut c = carousel(5);
    settle(&mut c, &stage);
    // Scaling around the center leaves the center where it was.
    assert_eq!(c.offset(), stage.centered_offset(2));

    c.dispatch(Input::Prev);
    settle(&mut c, &stage);
    assert_eq!(c.offset(), stage.centered_offset(1));
}

#[test]
fn centering_without_slide_geometry_keeps_offset() {
    let mut c = carousel(3);
    let empty = Frame {
        viewport: Bounds::new(0.0, 300.0),
        slides: Vec::new(),
    };
    let r = c.center_on_active(&empty);
    assert!(r.is_empty());
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn drag_tracks_pointer_one_to_one() {
    let stage = Stage::new();
    let mut c = carousel(5);
    settle(&mut c, &stage);
    let base = c.offset();

    let r = c.dispatch(Input::DragStart(200.0));
    assert_eq!(r.transition, Some(false));
    assert!(c.is_dragging());
    assert!(!c.transition_enabled());
    assert_eq!(
        c.drag_state(),
        Some(DragState {
            anchor_x: 200.0,
            anchor_offset: base
        })
    );

    let r = c.dispatch(Input::DragMove(170.0));
    assert_eq!(r.offset, Some(base - 30.0));
    c.dispatch(Input::DragMove(260.0));
    assert_eq!(c.offset(), base + 60.0);
    assert_eq!(c.index(), 2);
}

#[test]
fn drag_past_threshold_commits() {
    let stage = Stage::new();

    let mut c = carousel(5);
    settle(&mut c, &stage);
    c.dispatch(Input::DragStart(300.0));
    let r = c.dispatch(Input::DragEnd(259.0));
    assert_eq!(r.transition, Some(true));
    assert_eq!(r.active, Some(ActiveChange { from: 2, to: 3 }));
    assert!(r.request_frame);
    assert!(!c.is_dragging());
    assert!(c.transition_enabled());

    let mut c = carousel(5);
    settle(&mut c, &stage);
    c.dispatch(Input::DragStart(300.0));
    c.dispatch(Input::DragEnd(341.0));
    assert_eq!(c.index(), 1);
}

#[test]
fn drag_within_threshold_snaps_back() {
    let stage = Stage::new();
    for dx in [-40.0f32, -39.5, 0.0, 12.0, 40.0] {
        let mut c = carousel(5);
        settle(&mut c, &stage);
        c.dispatch(Input::DragStart(300.0));
        c.dispatch(Input::DragMove(300.0 + dx));
        let r = c.dispatch(Input::DragEnd(300.0 + dx));
        assert_eq!(
            r.active,
            Some(ActiveChange { from: 2, to: 2 }),
            "dx={dx}"
        );
        assert!(r.request_frame);

        settle(&mut c, &stage);
        assert_eq!(c.offset(), stage.centered_offset(2));
    }
}

#[test]
fn swipe_decision_thresholds() {
    assert_eq!(SwipeDecision::from_displacement(-41.0), SwipeDecision::Next);
    assert_eq!(SwipeDecision::from_displacement(41.0), SwipeDecision::Prev);
    assert_eq!(
        SwipeDecision::from_displacement(-SWIPE_THRESHOLD_PX),
        SwipeDecision::SnapBack
    );
    assert_eq!(
        SwipeDecision::from_displacement(SWIPE_THRESHOLD_PX),
        SwipeDecision::SnapBack
    );
}

#[test]
fn stray_drag_events_are_ignored() {
    let mut c = carousel(5);
    assert!(c.dispatch(Input::DragMove(10.0)).is_empty());
    assert!(c.dispatch(Input::DragEnd(-500.0)).is_empty());
    assert_eq!(c.index(), 2);
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn drag_from_last_slide_wraps() {
    let mut c = carousel(3);
    c.go_to(2);
    c.dispatch(Input::DragStart(100.0));
    c.dispatch(Input::DragEnd(0.0));
    assert_single_active(&c, 0);
}

#[test]
fn resize_is_debounced_from_last_event() {
    let stage = Stage::new();
    let mut c = carousel(5);
    settle(&mut c, &stage);

    for now_ms in [0u64, 10, 20, 30, 40] {
        let r = c.dispatch(Input::Resize { now_ms });
        assert!(r.arm_resize_timer);
        assert!(!r.request_frame);
    }
    assert_eq!(c.resize_deadline(), Some(40 + RESIZE_DEBOUNCE_MS));

    let mut fired = 0;
    for now_ms in (40..=400).step_by(5) {
        let r = c.update(now_ms);
        if r.request_frame {
            fired += 1;
            assert_eq!(now_ms, 120);
            assert_eq!(r.active, Some(ActiveChange { from: 2, to: 2 }));
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(c.resize_deadline(), None);
}

#[test]
fn resize_recenters_against_new_viewport() {
    let mut stage = Stage::new();
    let mut c = carousel(5);
    settle(&mut c, &stage);

    stage.viewport = Bounds::new(0.0, 800.0);
    c.dispatch(Input::Resize { now_ms: 1_000 });
    c.update(1_080);
    settle(&mut c, &stage);
    assert_eq!(c.offset(), stage.centered_offset(2));
}

#[test]
fn flush_resize_fires_once() {
    let mut c = carousel(5);
    assert!(c.flush_resize().is_empty());
    c.dispatch(Input::Resize { now_ms: 5 });
    assert!(c.flush_resize().request_frame);
    assert!(c.flush_resize().is_empty());
    assert!(c.update(10_000).is_empty());
}

#[test]
fn indicators_mirror_slides_and_carry_labels() {
    let c = carousel(3);
    let dots = c.indicators().to_vec();
    assert_eq!(dots.len(), 3);
    assert_eq!(dots[0].label, "Go to brand 1");
    assert_eq!(dots[2].label, "Go to brand 3");
    assert!(dots[1].active);
    assert!(!dots[0].active && !dots[2].active);

    let custom = Carousel::new(
        CarouselOptions::new(2).with_indicator_label(|i| format!("Slide {} of 2", i + 1)),
    )
    .unwrap();
    assert_eq!(custom.indicators().label(1), Some("Slide 2 of 2"));
    assert_eq!(custom.indicators().label(2), None);
}

#[test]
fn indicator_click_navigates() {
    let mut c = carousel(6);
    let r = c.dispatch(Input::GoTo(1));
    assert_eq!(r.active, Some(ActiveChange { from: 3, to: 1 }));
    assert_single_active(&c, 1);
}

#[test]
fn keys_map_to_navigation() {
    assert_eq!(Key::from_name("ArrowLeft").input(), Some(Input::Prev));
    assert_eq!(Key::from_name("ArrowRight").input(), Some(Input::Next));
    assert_eq!(Key::from_name("Enter"), Key::Other);
    assert_eq!(Key::Other.input(), None);
}

#[test]
fn on_change_is_coalesced_per_input() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(CarouselOptions::new(5).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Carousel| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })))
    .unwrap();

    c.dispatch(Input::Next);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.dispatch(Input::DragStart(0.0));
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    c.dispatch(Input::DragEnd(-100.0));
    assert_eq!(calls.load(Ordering::Relaxed), 3);

    c.batch_update(|c| {
        c.next();
        c.prev();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn on_change_sees_updated_state() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let mut c = Carousel::new(CarouselOptions::new(4).with_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &Carousel| seen.store(c.index(), Ordering::Relaxed)
    })))
    .unwrap();
    c.dispatch(Input::Prev);
    assert_eq!(seen.load(Ordering::Relaxed), 1);
}

#[test]
fn response_merge_keeps_first_origin_and_last_target() {
    let mut r = Response {
        active: Some(ActiveChange { from: 1, to: 2 }),
        transition: Some(false),
        ..Response::default()
    };
    r.merge(Response {
        active: Some(ActiveChange { from: 2, to: 3 }),
        transition: Some(true),
        request_frame: true,
        ..Response::default()
    });
    assert_eq!(r.active, Some(ActiveChange { from: 1, to: 3 }));
    assert_eq!(r.transition, Some(true));
    assert!(r.request_frame);
    assert_eq!(r.offset, None);
}

#[test]
fn snapshot_reflects_drag() {
    let mut c = carousel(3);
    c.dispatch(Input::DragStart(10.0));
    c.dispatch(Input::DragMove(25.0));
    assert_eq!(
        c.snapshot(),
        Snapshot {
            slide_count: 3,
            index: 1,
            offset: 15.0,
            dragging: true,
            transition_enabled: false,
        }
    );
}
