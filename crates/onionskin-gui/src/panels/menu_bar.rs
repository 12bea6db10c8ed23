use std::path::Path;

use anyhow::Context;
use onionskin_core::config::OnionskinConfig;

use crate::app::OnionskinApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut OnionskinApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(
                        egui::Button::new("Load Overlay Image...")
                            .shortcut_text(ctx.format_shortcut(&super::OPEN_SHORTCUT)),
                    )
                    .clicked()
                {
                    ui.close();
                    super::compare::open_overlay_file(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Toggle Sidebar").clicked() {
                    ui.close();
                    app.shell.toggle_sidebar();
                }
                let has_compare = app.shell.compare().is_some();
                if ui
                    .add_enabled(
                        has_compare,
                        egui::Button::new("Design Overlay")
                            .shortcut_text(ctx.format_shortcut(&super::COMPARE_SHORTCUT)),
                    )
                    .clicked()
                {
                    ui.close();
                    super::compare::toggle(app);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(compare) = app.shell.compare() {
                    let expanded = compare.aria_expanded();
                    if ui
                        .selectable_label(expanded, "Compare")
                        .on_hover_text("Overlay a design image on the dashboard")
                        .clicked()
                    {
                        super::compare::toggle(app);
                    }
                }
                let menu_label = if app.shell.sidebar_aria_expanded() { "Close menu" } else { "Menu" };
                if ui.button(menu_label).clicked() {
                    app.shell.toggle_sidebar();
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(app: &mut OnionskinApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let config = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
            .and_then(|path| match OnionskinConfig::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Config import failed: {e}");
                    None
                }
            });
        if let Some(config) = config {
            let _ = result_tx.send(WorkerResult::ConfigImported { config });
        }
    });
}

fn export_config(app: &mut OnionskinApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("onionskin.toml")
            .save_file()
        {
            let message = match write_config(&config, &path) {
                Ok(()) => format!("Config exported to {}", path.display()),
                Err(e) => {
                    tracing::warn!("{e:#}");
                    format!("Config export failed: {e:#}")
                }
            };
            let _ = result_tx.send(WorkerResult::Log { message });
        }
    });
}

fn write_config(config: &OnionskinConfig, path: &Path) -> anyhow::Result<()> {
    let content = config.to_toml_string().context("serializing config")?;
    std::fs::write(path, content)
        .with_context(|| format!("writing config to {}", path.display()))?;
    Ok(())
}
