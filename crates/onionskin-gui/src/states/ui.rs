use std::path::PathBuf;

use onionskin_core::geometry::Rect;

/// Overall UI state outside the shell and compare tool.
pub struct UIState {
    /// Last overlay file the user picked (shown in the compare panel).
    pub overlay_path: Option<PathBuf>,

    /// Reference container rect reported by the previous frame.
    pub last_reference: Option<Rect>,
    /// Window width reported by the previous frame.
    pub last_window_width: Option<f32>,

    /// Sidebar entry last clicked.
    pub active_nav: &'static str,
    pub search_query: String,

    pub log_messages: Vec<String>,
    pub show_about: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            overlay_path: None,
            last_reference: None,
            last_window_width: None,
            active_nav: "Overview",
            search_query: String::new(),
            log_messages: Vec::new(),
            show_about: false,
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
