mod dashboard;
mod ui;

pub use dashboard::{Category, DashboardState, Timeframe, CHART_METRICS};
pub use ui::UIState;
