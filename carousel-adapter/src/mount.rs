use alloc::vec::Vec;

use carousel::CarouselOptions;

use crate::Controller;

/// Why a root was left inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MountError {
    #[error("carousel root has no track element")]
    MissingTrack,
    #[error("carousel root has no slides")]
    NoSlides,
    #[error("carousel root has no viewport element")]
    MissingViewport,
}

/// Element handles found under one carousel root.
///
/// `E` is the toolkit's element handle (e.g. `web_sys::HtmlElement`).
#[derive(Clone, Debug)]
pub struct RootParts<E> {
    pub root: E,
    pub track: Option<E>,
    pub viewport: Option<E>,
    pub slides: Vec<E>,
    pub prev_button: Option<E>,
    pub next_button: Option<E>,
    pub indicator_container: Option<E>,
}

/// Which optional input paths a mounted carousel has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wiring {
    pub prev_button: bool,
    pub next_button: bool,
    pub indicators: bool,
}

/// A root whose required parts were all present, together with its controller.
#[derive(Clone, Debug)]
pub struct Mounted<E> {
    pub root: E,
    pub track: E,
    pub viewport: E,
    pub slides: Vec<E>,
    pub prev_button: Option<E>,
    pub next_button: Option<E>,
    pub indicator_container: Option<E>,
    pub controller: Controller,
}

impl<E> Mounted<E> {
    pub fn wiring(&self) -> Wiring {
        Wiring {
            prev_button: self.prev_button.is_some(),
            next_button: self.next_button.is_some(),
            indicators: self.indicator_container.is_some(),
        }
    }
}

impl<E> RootParts<E> {
    /// Checks the required parts and builds the controller.
    ///
    /// `configure` receives the default options for the discovered slide count.
    pub fn mount(
        self,
        configure: impl FnOnce(CarouselOptions) -> CarouselOptions,
    ) -> Result<Mounted<E>, MountError> {
        let track = self.track.ok_or(MountError::MissingTrack)?;
        if self.slides.is_empty() {
            return Err(MountError::NoSlides);
        }
        let viewport = self.viewport.ok_or(MountError::MissingViewport)?;

        let mut options = configure(CarouselOptions::new(self.slides.len()));
        // The slide count comes from the markup, not from `configure`.
        options.slide_count = self.slides.len();
        let controller = Controller::new(options).ok_or(MountError::NoSlides)?;

        Ok(Mounted {
            root: self.root,
            track,
            viewport,
            slides: self.slides,
            prev_button: self.prev_button,
            next_button: self.next_button,
            indicator_container: self.indicator_container,
            controller,
        })
    }
}

/// Mounts every root independently. Roots missing required parts are logged and dropped.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn attach_all<E>(
    roots: impl IntoIterator<Item = RootParts<E>>,
    configure: impl Fn(CarouselOptions) -> CarouselOptions,
) -> Vec<Mounted<E>> {
    roots
        .into_iter()
        .enumerate()
        .filter_map(|(i, parts)| {
            parts
                .mount(&configure)
                .inspect(|mounted| {
                    adebug!(root = i, slides = mounted.slides.len(), "carousel mounted");
                })
                .inspect_err(|err| {
                    adebug!(root = i, %err, "carousel root left inert");
                })
                .ok()
        })
        .collect()
}
