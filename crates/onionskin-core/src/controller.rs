use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::config::OnionskinConfig;
use crate::error::Result;
use crate::fit::FitMode;
use crate::geometry::Rect;
use crate::io::image_io::OverlayImage;
use crate::render::{project, OverlayView};
use crate::state::OverlayState;
use crate::timing::{Throttle, ThrottleDecision};

/// Host elements the compare tool binds to.
///
/// A host that cannot provide one of them (a layout without a compare
/// toolbar, say) still builds a mount; [`OverlayController::attach`] then
/// declines and the feature is simply absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayMount {
    pub has_toggle: bool,
    pub has_panel: bool,
    pub has_overlay_surface: bool,
    /// Current on-screen rectangle of the reference container.
    pub reference: Option<Rect>,
}

impl OverlayMount {
    /// Mount with every element present.
    pub fn complete(reference: Rect) -> Self {
        Self {
            has_toggle: true,
            has_panel: true,
            has_overlay_surface: true,
            reference: Some(reference),
        }
    }
}

/// Owns the overlay state, the compare panel's open flag and the throttle
/// that paces bounds tracking.
#[derive(Debug)]
pub struct OverlayController {
    state: OverlayState,
    panel_open: bool,
    throttle: Throttle,
    /// Most recent reference geometry seen by `on_layout_event`.
    latest_reference: Rect,
}

impl OverlayController {
    /// Bind to the host. Returns `None` when a required element is missing.
    pub fn attach(mount: OverlayMount, config: &OnionskinConfig) -> Option<Self> {
        if !(mount.has_toggle && mount.has_panel && mount.has_overlay_surface) {
            debug!(?mount, "compare tool not mounted: missing control or overlay surface");
            return None;
        }
        let Some(reference) = mount.reference else {
            debug!("compare tool not mounted: no reference container");
            return None;
        };

        let mut controller = Self {
            state: OverlayState::with_defaults(
                config.overlay.opacity_percent,
                config.overlay.fit_mode,
            ),
            panel_open: false,
            throttle: Throttle::new(config.timing.throttle()),
            latest_reference: reference,
        };
        controller.recompute_bounds(reference);
        Some(controller)
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn view(&self) -> OverlayView {
        project(&self.state)
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Accessibility expanded-state of the toggle control.
    pub fn aria_expanded(&self) -> bool {
        self.panel_open
    }

    /// Flip the compare panel. Opening re-evaluates overlay display: shown
    /// if an image is loaded, hidden otherwise. Returns the new open state.
    pub fn toggle_config_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            let has_image = self.state.has_image();
            self.state.set_displayed(has_image);
        }
        debug!(open = self.panel_open, "compare panel toggled");
        self.panel_open
    }

    /// Close the panel. Image, opacity, fit mode and display are untouched.
    pub fn close_config_panel(&mut self) {
        if self.panel_open {
            debug!("compare panel closed");
        }
        self.panel_open = false;
    }

    /// Apply the completion of an asynchronous decode.
    ///
    /// A failed decode is dropped: the previous image (if any) stays, and
    /// nothing is surfaced beyond a log line. Returns whether an image was
    /// applied.
    pub fn load_image(&mut self, decoded: Result<OverlayImage>) -> bool {
        match decoded {
            Ok(image) => {
                debug!(width = image.width, height = image.height, "overlay image applied");
                self.state.replace_image(image);
                true
            }
            Err(e) => {
                warn!("overlay image ignored: {e}");
                false
            }
        }
    }

    pub fn set_opacity(&mut self, percent: u8) {
        self.state.set_opacity_percent(percent);
    }

    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.state.set_fit_mode(mode);
    }

    /// Snap the overlay to the reference container's current rectangle.
    pub fn recompute_bounds(&mut self, reference: Rect) {
        trace!(?reference, "overlay bounds recomputed");
        self.latest_reference = reference;
        self.state.set_bounds(reference);
    }

    /// Resize/scroll entry point. Runs `recompute_bounds` now if the
    /// throttle allows it, otherwise queues one trailing run that `tick`
    /// will fire with the newest geometry.
    pub fn on_layout_event(&mut self, now: Instant, reference: Rect) {
        self.latest_reference = reference;
        if self.throttle.call(now) == ThrottleDecision::Run {
            self.recompute_bounds(reference);
        }
    }

    /// Service a due trailing run. Returns whether bounds were recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.throttle.poll(now) {
            self.recompute_bounds(self.latest_reference);
            true
        } else {
            false
        }
    }

    /// When the host should call `tick` next, if a trailing run is queued.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }
}
