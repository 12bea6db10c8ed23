use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};
use onionskin_core::geometry::Rect;

use crate::app::OnionskinApp;
use crate::convert::from_egui_rect;
use crate::states::{Category, Timeframe, CHART_METRICS};

const CHART_HEIGHT: f32 = 180.0;
const DROPDOWN_TIMEFRAME: &str = "timeframe";
const DROPDOWN_CATEGORY: &str = "category";
const TABS_VISITORS: &str = "visitors_chart";

/// Label, value, change, tooltip.
const KPIS: &[(&str, &str, &str, &str)] = &[
    ("Visitors", "24.8k", "+12%", "Unique visitors across all projects"),
    ("Projects", "38", "+3", "Published projects"),
    ("Appreciations", "1,204", "+8%", "Likes received this period"),
    ("Followers", "5,671", "+2%", "Net new followers"),
];

/// Name, followers, detail line shown when the row is expanded.
const TOP_FOLLOWERS: &[(&str, &str, &str)] = &[
    ("Ana Lima", "1.2k", "Art director, Lisbon. Follows 14 of your projects."),
    ("Ben Okafor", "980", "Product designer, Lagos. Last active 2 days ago."),
    ("Chen Wei", "860", "Illustrator, Taipei. Appreciated Brand refresh."),
];

const RECENT: &[(&str, &str)] = &[
    ("Brand refresh", "Behance"),
    ("Mobile banking UI", "Dribbble"),
    ("Packaging series", "Instagram"),
    ("Type specimen", "Behance"),
    ("Landing page kit", "Google"),
    ("Icon set", "Dribbble"),
];

/// Screen rects that count as "inside" an open dropdown.
#[derive(Default)]
struct DropdownHits {
    rects: Vec<egui::Rect>,
}

/// Draw the dashboard and return the on-screen rect of its content, the
/// reference container the design overlay tracks.
pub fn show(ctx: &egui::Context, app: &mut OnionskinApp) -> Option<Rect> {
    let mut reference = None;
    let mut hits = DropdownHits::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        let panel_rect = ui.max_rect();

        let output = egui::ScrollArea::vertical()
            .enable_scrolling(!app.shell.scroll_locked())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    header(ui, app, &mut hits);
                    ui.add_space(12.0);
                    kpi_row(ui);
                    ui.add_space(12.0);
                    charts(ui, app);
                    ui.add_space(12.0);
                    ui.columns(2, |cols| {
                        recent_projects(&mut cols[0]);
                        top_followers(&mut cols[1], app);
                    });
                })
                .response
                .rect
            });
        reference = Some(from_egui_rect(output.inner));

        if app.shell.backdrop_visible() {
            let response = ui.interact(
                panel_rect,
                egui::Id::new("sidebar_backdrop"),
                egui::Sense::click(),
            );
            ui.painter()
                .rect_filled(panel_rect, 0.0, egui::Color32::from_black_alpha(120));
            if response.clicked() {
                app.shell.click_backdrop();
            }
        }
    });

    dropdown_popups(ctx, app, &mut hits);

    if app.shell.open_dropdown().is_some() {
        let clicked_at = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = clicked_at {
            if !hits.rects.iter().any(|r| r.contains(pos)) {
                app.shell.click_outside();
            }
        }
    }

    reference
}

fn header(ui: &mut egui::Ui, app: &mut OnionskinApp, hits: &mut DropdownHits) {
    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        ui.add_space(16.0);
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.ui_state.search_query)
                .hint_text("Search  /")
                .desired_width(200.0),
        );
        if app.shell.take_search_focus() {
            search.request_focus();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let category = app.dashboard.category.to_string();
            dropdown_button(ui, app, hits, DROPDOWN_CATEGORY, &category);
            let timeframe = app.dashboard.timeframe.to_string();
            dropdown_button(ui, app, hits, DROPDOWN_TIMEFRAME, &timeframe);
        });
    });
}

fn dropdown_button(
    ui: &mut egui::Ui,
    app: &mut OnionskinApp,
    hits: &mut DropdownHits,
    id: &str,
    label: &str,
) {
    let open = app.shell.is_dropdown_open(id);
    let arrow = if open { "\u{25B4}" } else { "\u{25BE}" };
    let response = ui.button(format!("{label} {arrow}"));
    if response.clicked() {
        app.shell.toggle_dropdown(id);
    }
    hits.rects.push(response.rect);
    ui.data_mut(|d| d.insert_temp(egui::Id::new(("dropdown_anchor", id)), response.rect));
}

fn dropdown_popups(ctx: &egui::Context, app: &mut OnionskinApp, hits: &mut DropdownHits) {
    let Some(open) = app.shell.open_dropdown().map(str::to_owned) else {
        return;
    };
    let Some(anchor) = ctx.data(|d| d.get_temp::<egui::Rect>(egui::Id::new(("dropdown_anchor", open.as_str())))) else {
        return;
    };

    let area = egui::Area::new(egui::Id::new(("dropdown", open.as_str())))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(anchor.width());
                let mut chosen = false;
                match open.as_str() {
                    DROPDOWN_TIMEFRAME => {
                        for t in Timeframe::ALL {
                            chosen |= ui
                                .selectable_value(&mut app.dashboard.timeframe, t, t.to_string())
                                .clicked();
                        }
                    }
                    DROPDOWN_CATEGORY => {
                        for c in Category::ALL {
                            chosen |= ui
                                .selectable_value(&mut app.dashboard.category, c, c.to_string())
                                .clicked();
                        }
                    }
                    _ => {}
                }
                chosen
            })
            .inner
        });

    hits.rects.push(area.response.rect);
    if area.inner {
        app.shell.toggle_dropdown(&open);
    }
}

fn kpi_row(ui: &mut egui::Ui) {
    ui.columns(KPIS.len(), |cols| {
        for (col, (label, value, delta, tooltip)) in cols.iter_mut().zip(KPIS) {
            let card = egui::Frame::group(col.style()).show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.small(*label);
                ui.heading(*value);
                ui.colored_label(egui::Color32::from_rgb(80, 180, 80), *delta);
            });
            if col.rect_contains_pointer(card.response.rect) {
                super::anchored_tooltip(col.ctx(), card.response.rect, tooltip);
            }
        }
    });
}

fn charts(ui: &mut egui::Ui, app: &mut OnionskinApp) {
    ui.columns(2, |cols| {
        egui::Frame::group(cols[0].style()).show(&mut cols[0], |ui| {
            let active = app.shell.active_tab(TABS_VISITORS);
            ui.horizontal(|ui| {
                for (i, metric) in CHART_METRICS.iter().enumerate() {
                    if ui.selectable_label(i == active, *metric).clicked() {
                        app.shell.select_tab(TABS_VISITORS, i);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(app.dashboard.timeframe.to_string());
                });
            });
            let metric = app.shell.active_tab(TABS_VISITORS).min(CHART_METRICS.len() - 1);
            let line = Line::new(CHART_METRICS[metric], PlotPoints::from(app.dashboard.series(metric)))
                .color(egui::Color32::from_rgb(0xE9, 0x1E, 0x63))
                .width(2.0);
            Plot::new("visitors_chart")
                .height(CHART_HEIGHT)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });

        egui::Frame::group(cols[1].style()).show(&mut cols[1], |ui| {
            super::section_header(ui, "Traffic sources", Some(&app.dashboard.category.to_string()));
            let bars: Vec<Bar> = app
                .dashboard
                .category
                .sources()
                .iter()
                .enumerate()
                .map(|(i, (name, share))| Bar::new(i as f64, *share).name(*name).width(0.6))
                .collect();
            Plot::new("sources_chart")
                .height(CHART_HEIGHT)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show_grid(false)
                .y_axis_label("%")
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(
                        BarChart::new("sources", bars).color(egui::Color32::from_rgb(0x17, 0x69, 0xFF)),
                    );
                });
        });
    });
}

fn recent_projects(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        super::section_header(ui, "Recent projects", None);
        ui.add_space(4.0);
        egui::Grid::new("recent_projects")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (title, source) in RECENT {
                    ui.label(*title);
                    ui.small(*source);
                    ui.end_row();
                }
            });
    });
}

fn top_followers(ui: &mut egui::Ui, app: &mut OnionskinApp) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        super::section_header(ui, "Top followers", None);
        ui.add_space(4.0);
        for (name, followers, detail) in TOP_FOLLOWERS {
            let expanded = app.shell.is_row_expanded(name);
            ui.horizontal(|ui| {
                ui.label(*name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let caret = if expanded { "\u{25B4}" } else { "\u{25BE}" };
                    if ui.small_button(caret).clicked() {
                        app.shell.toggle_row(name);
                    }
                    ui.small(*followers);
                });
            });
            if expanded {
                ui.indent(*name, |ui| {
                    ui.small(*detail);
                });
            }
        }
    });
}
