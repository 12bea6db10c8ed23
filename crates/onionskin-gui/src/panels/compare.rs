use onionskin_core::fit::FitMode;
use onionskin_core::io::image_io::first_selected;

use crate::app::OnionskinApp;
use crate::messages::WorkerCommand;

const PANEL_WIDTH: f32 = 260.0;

/// Compare toggle: flips the panel when the tool is mounted.
pub fn toggle(app: &mut OnionskinApp) {
    if let Some(compare) = app.shell.compare_mut() {
        compare.toggle_config_panel();
    }
}

/// Pick a design image and hand it to the decode worker.
pub fn open_overlay_file(app: &mut OnionskinApp) {
    if app.shell.compare().is_none() {
        return;
    }
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_files()
        {
            if let Some(path) = first_selected(&paths) {
                let _ = cmd_tx.send(WorkerCommand::DecodeOverlay {
                    path: path.to_path_buf(),
                });
            }
        }
    });
}

pub fn show(ctx: &egui::Context, app: &mut OnionskinApp) {
    let Some(compare) = app.shell.compare() else {
        return;
    };
    if !compare.is_panel_open() {
        return;
    }

    let state = compare.state();
    let mut opacity = state.opacity_percent();
    let mut fit = state.fit_mode();
    let image_info = state
        .image()
        .map(|img| format!("{}x{}", img.width, img.height));
    let file_name = app
        .ui_state
        .overlay_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string());

    let mut open = true;
    let mut close_clicked = false;
    let mut load_clicked = false;

    egui::Window::new("Design Overlay")
        .open(&mut open)
        .order(egui::Order::Tooltip)
        .resizable(false)
        .collapsible(false)
        .default_width(PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .show(ctx, |ui| {
            super::section_header(ui, "Image", image_info.as_deref());
            ui.add_space(4.0);
            if ui.button("Load image...").clicked() {
                load_clicked = true;
            }
            if let Some(ref name) = file_name {
                ui.small(name);
            }

            ui.separator();
            super::section_header(ui, "Opacity", None);
            ui.add(
                egui::Slider::new(&mut opacity, 0..=100)
                    .suffix("%")
                    .clamping(egui::SliderClamping::Always),
            );

            ui.separator();
            super::section_header(ui, "Fit", None);
            ui.horizontal(|ui| {
                for mode in FitMode::ALL {
                    ui.selectable_value(&mut fit, mode, mode.button_label())
                        .on_hover_text(mode.to_string());
                }
            });

            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if load_clicked {
        open_overlay_file(app);
    }
    if let Some(compare) = app.shell.compare_mut() {
        compare.set_opacity(opacity);
        compare.set_fit_mode(fit);
        if !open || close_clicked {
            compare.close_config_panel();
        }
    }
}
