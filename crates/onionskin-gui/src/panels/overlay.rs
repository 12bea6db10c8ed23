use crate::app::OnionskinApp;
use crate::convert::{to_egui_rect, uv_to_egui};

/// Paint the design image over everything except the compare panel.
/// Painting only: the overlay never takes pointer input.
pub fn paint(ctx: &egui::Context, app: &OnionskinApp) {
    let Some(compare) = app.shell.compare() else {
        return;
    };
    let view = compare.view();
    if !view.visible {
        return;
    }
    let (Some(texture), Some(placement)) = (app.overlay_texture.as_ref(), view.placement) else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("design_overlay"),
    ));
    let alpha = (view.opacity * 255.0).round() as u8;
    painter.image(
        texture.id(),
        to_egui_rect(placement.dest),
        uv_to_egui(placement.uv),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
    );
}
