/// Range of the mock analytics shown behind the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    pub fn points(&self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 12,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Week => write!(f, "Last 7 days"),
            Self::Month => write!(f, "Last 30 days"),
            Self::Year => write!(f, "Last 12 months"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Design,
    Social,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::All, Category::Design, Category::Social];

    /// Referral sources listed for this category.
    pub fn sources(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::All => &[
                ("Behance", 42.0),
                ("Google", 31.0),
                ("Dribbble", 18.0),
                ("Instagram", 9.0),
            ],
            Self::Design => &[("Behance", 42.0), ("Dribbble", 18.0)],
            Self::Social => &[("Instagram", 9.0)],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All sources"),
            Self::Design => write!(f, "Design"),
            Self::Social => write!(f, "Social"),
        }
    }
}

/// Series selectable through the tabs above the main chart.
pub const CHART_METRICS: [&str; 3] = ["Visitors", "Views", "Appreciations"];

/// Selections made in the dashboard's dropdowns.
#[derive(Default)]
pub struct DashboardState {
    pub timeframe: Timeframe,
    pub category: Category,
}

impl DashboardState {
    /// Deterministic series for `metric` (an index into [`CHART_METRICS`])
    /// over the selected timeframe.
    pub fn series(&self, metric: usize) -> Vec<[f64; 2]> {
        let (base, swing) = match metric {
            1 => (3400.0, 800.0),
            2 => (90.0, 35.0),
            _ => (1200.0, 300.0),
        };
        (0..self.timeframe.points())
            .map(|i| {
                let x = i as f64;
                [x, base + swing * (x * 0.7).sin() + base / 48.0 * x]
            })
            .collect()
    }
}
