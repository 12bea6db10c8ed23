use std::sync::Arc;

use crate::consts::{DEFAULT_OPACITY_PERCENT, MAX_OPACITY_PERCENT};
use crate::fit::FitMode;
use crate::geometry::Rect;
use crate::io::image_io::OverlayImage;

/// Everything the overlay shows, and nothing else. Display surfaces read a
/// projection of this (see [`crate::render::project`]); they never keep
/// their own copy of position or visibility.
#[derive(Clone, Debug)]
pub struct OverlayState {
    image: Option<Arc<OverlayImage>>,
    displayed: bool,
    opacity_percent: u8,
    fit_mode: FitMode,
    bounds: Rect,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            image: None,
            displayed: false,
            opacity_percent: DEFAULT_OPACITY_PERCENT,
            fit_mode: FitMode::default(),
            bounds: Rect::default(),
        }
    }
}

impl OverlayState {
    pub fn with_defaults(opacity_percent: u8, fit_mode: FitMode) -> Self {
        Self {
            opacity_percent: opacity_percent.min(MAX_OPACITY_PERCENT),
            fit_mode,
            ..Self::default()
        }
    }

    pub fn image(&self) -> Option<&Arc<OverlayImage>> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Never true without an image, whatever the display flag says.
    pub fn visible(&self) -> bool {
        self.displayed && self.image.is_some()
    }

    pub fn opacity_percent(&self) -> u8 {
        self.opacity_percent
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn replace_image(&mut self, image: OverlayImage) {
        self.image = Some(Arc::new(image));
        self.displayed = true;
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    pub(crate) fn set_opacity_percent(&mut self, percent: u8) {
        self.opacity_percent = percent.min(MAX_OPACITY_PERCENT);
    }

    pub(crate) fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
