use crate::consts::MAX_OPACITY_PERCENT;
use crate::fit::{place, Placement};
use crate::geometry::Rect;
use crate::state::OverlayState;

/// Display attributes of the overlay, derived from [`OverlayState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayView {
    pub visible: bool,
    /// 0.0 (transparent) ..= 1.0 (opaque).
    pub opacity: f32,
    pub bounds: Rect,
    /// `None` until an image has been loaded.
    pub placement: Option<Placement>,
}

/// Map an opacity percentage to a 0..=1 alpha factor.
pub fn opacity_factor(percent: u8) -> f32 {
    f32::from(percent.min(MAX_OPACITY_PERCENT)) / f32::from(MAX_OPACITY_PERCENT)
}

pub fn project(state: &OverlayState) -> OverlayView {
    let bounds = state.bounds();
    OverlayView {
        visible: state.visible(),
        opacity: opacity_factor(state.opacity_percent()),
        bounds,
        placement: state
            .image()
            .map(|img| place(state.fit_mode(), img.size(), bounds)),
    }
}
