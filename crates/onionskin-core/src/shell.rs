//! Dashboard chrome around the compare tool: the collapsible sidebar and its
//! submenus, dropdown menus, chart tabs, expandable user rows, the search
//! shortcut, and the global Escape key.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::config::{Breakpoints, OnionskinConfig};
use crate::controller::OverlayController;
use crate::timing::Debounce;

/// What a single Escape press closed. Each part is decided independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscapeOutcome {
    pub dropdown_closed: bool,
    pub sidebar_closed: bool,
    pub compare_panel_closed: bool,
}

impl EscapeOutcome {
    pub fn closed_anything(&self) -> bool {
        self.dropdown_closed || self.sidebar_closed || self.compare_panel_closed
    }
}

#[derive(Debug)]
pub struct DashboardShell {
    sidebar_open: bool,
    open_dropdown: Option<String>,
    open_submenus: HashSet<String>,
    /// Active tab per tab group; groups never clicked are on tab 0.
    active_tabs: HashMap<String, usize>,
    expanded_rows: HashSet<String>,
    search_focus_requested: bool,
    compare: Option<OverlayController>,
    breakpoints: Breakpoints,
    resize_debounce: Debounce,
    last_window_width: Option<f32>,
}

impl DashboardShell {
    pub fn new(config: &OnionskinConfig, compare: Option<OverlayController>) -> Self {
        Self {
            sidebar_open: false,
            open_dropdown: None,
            open_submenus: HashSet::new(),
            active_tabs: HashMap::new(),
            expanded_rows: HashSet::new(),
            search_focus_requested: false,
            compare,
            breakpoints: config.breakpoints.clone(),
            resize_debounce: Debounce::new(config.timing.debounce()),
            last_window_width: None,
        }
    }

    /// Mount the compare tool after construction, for hosts that only know
    /// the reference geometry once the first layout pass has run.
    pub fn install_compare(&mut self, compare: OverlayController) {
        self.compare = Some(compare);
    }

    pub fn compare(&self) -> Option<&OverlayController> {
        self.compare.as_ref()
    }

    pub fn compare_mut(&mut self) -> Option<&mut OverlayController> {
        self.compare.as_mut()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// The dimming layer behind the sidebar follows the sidebar.
    pub fn backdrop_visible(&self) -> bool {
        self.sidebar_open
    }

    /// Page scrolling is locked while the sidebar covers it.
    pub fn scroll_locked(&self) -> bool {
        self.sidebar_open
    }

    pub fn sidebar_aria_expanded(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        debug!(open = self.sidebar_open, "sidebar toggled");
        self.sidebar_open
    }

    pub fn click_backdrop(&mut self) {
        if self.sidebar_open {
            self.toggle_sidebar();
        }
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.open_dropdown.as_deref()
    }

    pub fn is_dropdown_open(&self, id: &str) -> bool {
        self.open_dropdown.as_deref() == Some(id)
    }

    /// Close any other dropdown, then flip `id`.
    pub fn toggle_dropdown(&mut self, id: &str) {
        if self.is_dropdown_open(id) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(id.to_owned());
        }
    }

    /// A click that landed outside every dropdown.
    pub fn click_outside(&mut self) {
        self.open_dropdown = None;
    }

    pub fn is_submenu_open(&self, id: &str) -> bool {
        self.open_submenus.contains(id)
    }

    /// Flip one sidebar submenu. Returns whether it is now open.
    pub fn toggle_submenu(&mut self, id: &str) -> bool {
        let open = if self.open_submenus.remove(id) {
            false
        } else {
            self.open_submenus.insert(id.to_owned());
            true
        };
        debug!(id, open, "submenu toggled");
        open
    }

    pub fn active_tab(&self, group: &str) -> usize {
        self.active_tabs.get(group).copied().unwrap_or(0)
    }

    /// Make `index` the single active tab of `group`.
    pub fn select_tab(&mut self, group: &str, index: usize) {
        self.active_tabs.insert(group.to_owned(), index);
    }

    pub fn is_row_expanded(&self, id: &str) -> bool {
        self.expanded_rows.contains(id)
    }

    /// Expand or collapse one user row. Returns whether it is now expanded.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        if self.expanded_rows.remove(id) {
            false
        } else {
            self.expanded_rows.insert(id.to_owned());
            true
        }
    }

    /// The `/` key. Ignored while the user is typing into a text field;
    /// otherwise the search field should grab focus.
    pub fn handle_slash(&mut self, typing_in_text_field: bool) -> bool {
        if typing_in_text_field {
            return false;
        }
        self.search_focus_requested = true;
        true
    }

    /// Consume a pending search focus request.
    pub fn take_search_focus(&mut self) -> bool {
        std::mem::take(&mut self.search_focus_requested)
    }

    pub fn handle_escape(&mut self) -> EscapeOutcome {
        let mut outcome = EscapeOutcome::default();

        if self.open_dropdown.take().is_some() {
            outcome.dropdown_closed = true;
        }

        if self.sidebar_open {
            self.toggle_sidebar();
            outcome.sidebar_closed = true;
        }

        if let Some(compare) = self.compare.as_mut() {
            if compare.is_panel_open() {
                compare.close_config_panel();
                outcome.compare_panel_closed = true;
            }
        }

        if outcome.closed_anything() {
            debug!(?outcome, "escape handled");
        }
        outcome
    }

    /// Record a window resize. The sidebar reset waits for the debounce.
    pub fn on_window_resize(&mut self, now: Instant, width: f32) {
        self.last_window_width = Some(width);
        self.resize_debounce.call(now);
    }

    /// Service debounced and throttled work. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.resize_debounce.poll(now) {
            let wide = self
                .last_window_width
                .is_some_and(|w| w > self.breakpoints.desktop as f32);
            if wide && self.sidebar_open {
                self.sidebar_open = false;
                debug!("sidebar closed above desktop breakpoint");
                changed = true;
            }
        }

        if let Some(compare) = self.compare.as_mut() {
            changed |= compare.tick(now);
        }
        changed
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let compare = self.compare.as_ref().and_then(OverlayController::next_deadline);
        match (self.resize_debounce.deadline(), compare) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
