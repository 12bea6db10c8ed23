use crate::app::OnionskinApp;

const SIDEBAR_WIDTH: f32 = 220.0;

struct NavItem {
    label: &'static str,
    children: &'static [&'static str],
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Overview", children: &[] },
    NavItem { label: "Projects", children: &["Active", "Drafts", "Archived"] },
    NavItem { label: "Analytics", children: &["Traffic", "Engagement"] },
    NavItem { label: "Clients", children: &[] },
    NavItem { label: "Settings", children: &[] },
];

pub fn show(ctx: &egui::Context, app: &mut OnionskinApp) {
    if !app.shell.is_sidebar_open() {
        return;
    }

    egui::SidePanel::left("sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading("Codename");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("\u{2715}").on_hover_text("Close menu").clicked() {
                        app.shell.toggle_sidebar();
                    }
                });
            });
            ui.separator();
            for item in NAV_ITEMS {
                ui.add_space(2.0);
                nav_item(ui, app, item);
            }
        });
}

fn nav_item(ui: &mut egui::Ui, app: &mut OnionskinApp, item: &NavItem) {
    if item.children.is_empty() {
        let selected = app.ui_state.active_nav == item.label;
        if ui.selectable_label(selected, item.label).clicked() {
            app.ui_state.active_nav = item.label;
        }
        return;
    }

    let open = app.shell.is_submenu_open(item.label);
    let caret = if open { "\u{25B4}" } else { "\u{25BE}" };
    if ui.selectable_label(false, format!("{} {caret}", item.label)).clicked() {
        app.shell.toggle_submenu(item.label);
    }
    if open {
        ui.indent(item.label, |ui| {
            for child in item.children {
                let selected = app.ui_state.active_nav == *child;
                if ui.selectable_label(selected, *child).clicked() {
                    app.ui_state.active_nav = *child;
                }
            }
        });
    }
}
