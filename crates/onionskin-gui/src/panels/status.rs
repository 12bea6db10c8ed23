use crate::app::OnionskinApp;

pub fn show(ctx: &egui::Context, app: &mut OnionskinApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            match app.shell.compare() {
                Some(compare) => {
                    let state = compare.state();
                    if let Some(img) = state.image() {
                        ui.label(format!("Overlay {}x{}", img.width, img.height));
                        ui.separator();
                    }
                    ui.label(format!("Opacity: {}%", state.opacity_percent()));
                    ui.separator();
                    ui.label(format!("Fit: {}", state.fit_mode()));
                    ui.separator();
                    let b = state.bounds();
                    ui.label(format!(
                        "Bounds: {:.0},{:.0} {:.0}x{:.0}",
                        b.left, b.top, b.width, b.height
                    ));
                    if !state.visible() {
                        ui.separator();
                        ui.label("hidden");
                    }
                }
                None => {
                    ui.label("Compare tool unavailable");
                }
            }
        });

        ui.add_space(2.0);
    });
}
