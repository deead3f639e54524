use carousel::{Carousel, CarouselOptions, Input, Key, Layout, Response};

/// A framework-neutral controller that wraps a [`Carousel`] and keeps track of the callbacks an
/// adapter has outstanding.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_input` / `on_key` / `on_indicator` when UI events occur
/// - `on_frame(layout)` from the frame callback it registered (e.g. `requestAnimationFrame`)
/// - either `tick(now_ms)` from a frame loop, or `on_resize_timer()` from a one-shot timer, to
///   fire debounced resizes
///
/// Every method returns the [`Response`] to apply. `request_frame` is only set when no frame
/// callback is outstanding yet, so at most one is registered at a time.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    frame_requested: bool,
    resize_timer_armed: bool,
}

impl Controller {
    /// Returns `None` for an inert carousel (no slides).
    pub fn new(options: CarouselOptions) -> Option<Self> {
        Carousel::new(options).map(Self::from_carousel)
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            frame_requested: false,
            resize_timer_armed: false,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn resize_timer_armed(&self) -> bool {
        self.resize_timer_armed
    }

    /// The response that renders the starting state (active flags, reset transform, first
    /// frame request).
    pub fn start(&mut self) -> Response {
        let response = self.carousel.initial_response();
        self.track(response)
    }

    pub fn on_input(&mut self, input: Input) -> Response {
        let response = self.carousel.dispatch(input);
        self.track(response)
    }

    /// Keys other than the arrows are ignored.
    pub fn on_key(&mut self, key: Key) -> Response {
        match key.input() {
            Some(input) => self.on_input(input),
            None => Response::default(),
        }
    }

    pub fn on_indicator(&mut self, index: usize) -> Response {
        self.on_input(Input::GoTo(index))
    }

    /// Call from the frame callback registered for a previous `request_frame`.
    pub fn on_frame(&mut self, layout: &impl Layout) -> Response {
        self.frame_requested = false;
        let response = self.carousel.layout_settled(layout);
        self.track(response)
    }

    /// Polls the resize debounce against the adapter's clock.
    pub fn tick(&mut self, now_ms: u64) -> Response {
        let response = self.carousel.update(now_ms);
        if self.carousel.resize_deadline().is_none() {
            self.resize_timer_armed = false;
        }
        self.track(response)
    }

    /// Call from the one-shot timer scheduled for a previous `arm_resize_timer`.
    pub fn on_resize_timer(&mut self) -> Response {
        self.resize_timer_armed = false;
        let response = self.carousel.flush_resize();
        self.track(response)
    }

    fn track(&mut self, mut response: Response) -> Response {
        if response.request_frame {
            if self.frame_requested {
                response.request_frame = false;
            } else {
                self.frame_requested = true;
            }
        }
        if response.arm_resize_timer {
            self.resize_timer_armed = true;
        }
        response
    }
}
