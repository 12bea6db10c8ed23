pub mod compare;
pub mod dashboard;
pub mod keys;
pub mod menu_bar;
pub mod overlay;
pub mod sidebar;
pub mod status;

use onionskin_core::geometry::{tooltip_rect, Size};

use crate::convert::{from_egui_rect, to_egui_rect};

pub(crate) const COMPARE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::D);

pub(crate) const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);

/// Tooltip for a hovered element, centred above it.
pub(crate) fn anchored_tooltip(ctx: &egui::Context, anchor: egui::Rect, text: &str) {
    let padding = egui::vec2(8.0, 4.0);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("dashboard_tooltip"),
    ));
    let font = egui::TextStyle::Small.resolve(&ctx.style());
    let galley = painter.layout_no_wrap(text.to_owned(), font, egui::Color32::WHITE);
    let size = galley.size() + padding * 2.0;
    let rect = to_egui_rect(tooltip_rect(&from_egui_rect(anchor), Size::new(size.x, size.y)));
    painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(220));
    painter.galley(rect.min + padding, galley, egui::Color32::WHITE);
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
