use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::carousel::Carousel;

/// A callback fired after the carousel state changed (index, offset, drag or transition).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Produces the accessible label of the indicator at a (0-based) index.
pub type IndicatorLabel = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Default indicator label: `"Go to brand N"`, 1-indexed.
pub fn default_indicator_label(index: usize) -> String {
    format!("Go to brand {}", index + 1)
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: closures are stored in `Arc`s.
pub struct CarouselOptions {
    /// Number of slides. Fixed for the lifetime of the carousel.
    pub slide_count: usize,
    pub indicator_label: IndicatorLabel,
    /// Optional callback fired when the carousel's state changes.
    ///
    /// Within a single `dispatch`/`layout_settled`/`update` call, notifications are coalesced.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            slide_count: self.slide_count,
            indicator_label: Arc::clone(&self.indicator_label),
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            indicator_label: Arc::new(default_indicator_label),
            on_change: None,
        }
    }

    pub fn with_indicator_label(
        mut self,
        label: impl Fn(usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.indicator_label = Arc::new(label);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("slide_count", &self.slide_count)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
