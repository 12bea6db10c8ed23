use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::consts::{
    BREAKPOINT_DESKTOP, BREAKPOINT_MOBILE, BREAKPOINT_TABLET, BREAKPOINT_WIDE,
    DEFAULT_DEBOUNCE_MS, DEFAULT_OPACITY_PERCENT, DEFAULT_THROTTLE_MS, MAX_OPACITY_PERCENT,
};
use crate::error::Result;
use crate::fit::FitMode;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OnionskinConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub overlay: OverlayDefaults,
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl OnionskinConfig {
    /// Parse a TOML document. Missing tables and fields fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::OnionskinError::Config(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Minimum spacing between resize/scroll driven bounds updates.
    pub throttle_ms: u64,
    /// Quiet period before a window resize counts as settled.
    pub debounce_ms: u64,
}

impl TimingConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Initial overlay settings, applied when the controller is attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayDefaults {
    #[serde(deserialize_with = "clamped_percent")]
    pub opacity_percent: u8,
    pub fit_mode: FitMode,
}

impl OverlayDefaults {
    /// Explicit values (command-line flags, say) win over the configured ones.
    pub fn with_overrides(&self, opacity_percent: Option<u8>, fit_mode: Option<FitMode>) -> Self {
        Self {
            opacity_percent: opacity_percent
                .unwrap_or(self.opacity_percent)
                .min(MAX_OPACITY_PERCENT),
            fit_mode: fit_mode.unwrap_or(self.fit_mode),
        }
    }
}

/// Accept any integer and clamp it into the slider range.
fn clamped_percent<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, i64::from(MAX_OPACITY_PERCENT)) as u8)
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            opacity_percent: DEFAULT_OPACITY_PERCENT,
            fit_mode: FitMode::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    pub desktop: u32,
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: BREAKPOINT_MOBILE,
            tablet: BREAKPOINT_TABLET,
            desktop: BREAKPOINT_DESKTOP,
            wide: BREAKPOINT_WIDE,
        }
    }
}
