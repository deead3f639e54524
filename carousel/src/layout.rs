use crate::Bounds;

/// Geometry read back from the host after layout has settled.
///
/// Both boxes must be in the same coordinate space and must already include the track's
/// currently applied offset (as `getBoundingClientRect()` does).
pub trait Layout {
    fn viewport(&self) -> Bounds;

    /// Returns `None` if the slide is not (or no longer) laid out.
    fn slide(&self, index: usize) -> Option<Bounds>;
}

impl<L: Layout + ?Sized> Layout for &L {
    fn viewport(&self) -> Bounds {
        (**self).viewport()
    }

    fn slide(&self, index: usize) -> Option<Bounds> {
        (**self).slide(index)
    }
}

/// Distance the track has to move so that `slide` is centered in `viewport`.
pub fn center_delta(viewport: Bounds, slide: Bounds) -> f32 {
    viewport.center() - slide.center()
}
