use std::sync::mpsc;
use std::time::Instant;

use onionskin_core::config::OnionskinConfig;
use onionskin_core::controller::{OverlayController, OverlayMount};
use onionskin_core::geometry::Rect;
use onionskin_core::shell::DashboardShell;

use crate::convert::overlay_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{DashboardState, UIState};
use crate::worker;

pub struct OnionskinApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: OnionskinConfig,
    pub shell: DashboardShell,
    pub dashboard: DashboardState,
    pub ui_state: UIState,
    pub overlay_texture: Option<egui::TextureHandle>,
}

impl OnionskinApp {
    pub fn new(ctx: &egui::Context, config: OnionskinConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            shell: DashboardShell::new(&config, None),
            config,
            dashboard: DashboardState::default(),
            ui_state: UIState::default(),
            overlay_texture: None,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::OverlayDecoded { path, decoded } => {
                    let Some(compare) = self.shell.compare_mut() else {
                        continue;
                    };
                    if !compare.load_image(decoded) {
                        continue;
                    }
                    if let Some(image) = compare.state().image() {
                        self.overlay_texture = Some(ctx.load_texture(
                            "design_overlay",
                            overlay_to_color_image(image),
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                    self.ui_state.overlay_path = Some(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Replace the config. The shell and compare tool are rebuilt from it,
    /// which drops the current overlay.
    pub fn apply_config(&mut self, config: OnionskinConfig) {
        self.shell = DashboardShell::new(&config, None);
        self.config = config;
        self.overlay_texture = None;
        self.ui_state.overlay_path = None;
        self.ui_state.last_reference = None;
        self.ui_state.add_log("Config applied; overlay reset".into());
    }

    /// Feed this frame's reference geometry to the compare tool, mounting it
    /// on the first frame that has a usable rect.
    fn track_reference(&mut self, now: Instant, reference: Option<Rect>) {
        let reference = reference.filter(|r| !r.is_empty());

        if self.shell.compare().is_none() {
            let mount = OverlayMount {
                reference,
                ..OverlayMount::complete(Rect::default())
            };
            if let Some(controller) = OverlayController::attach(mount, &self.config) {
                self.shell.install_compare(controller);
                self.ui_state.last_reference = reference;
            }
            return;
        }

        let Some(reference) = reference else {
            return;
        };
        if self.ui_state.last_reference != Some(reference) {
            self.ui_state.last_reference = Some(reference);
            if let Some(compare) = self.shell.compare_mut() {
                compare.on_layout_event(now, reference);
            }
        }
    }

    fn track_window_width(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(width) = ctx.input(|i| i.viewport().inner_rect).map(|r| r.width()) else {
            return;
        };
        if self.ui_state.last_window_width != Some(width) {
            self.ui_state.last_window_width = Some(width);
            self.shell.on_window_resize(now, width);
        }
    }
}

impl eframe::App for OnionskinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_results(ctx);
        panels::keys::handle(ctx, self);
        self.track_window_width(ctx, now);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        let reference = panels::dashboard::show(ctx, self);
        self.track_reference(now, reference);
        self.shell.tick(now);

        panels::compare::show(ctx, self);
        panels::overlay::paint(ctx, self);

        if let Some(deadline) = self.shell.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        if self.ui_state.show_about {
            egui::Window::new("About Onionskin")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Onionskin");
                        ui.label("Design overlay comparison");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
