use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Cadences used by the update scheduler. Hosts can override these from a
/// settings file; the defaults match the behavior users know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    /// Delay between an event arriving and the coalesced experiment update
    /// firing. Every new event pushes the deadline out again.
    #[serde(default = "default_update_delay")]
    pub update_delay_secs: f64,
    /// Minimum spacing between two filter refreshes.
    #[serde(default = "default_half_second")]
    pub filter_interval_secs: f64,
    /// Minimum spacing between two situation recalculations while the window
    /// is shown.
    #[serde(default = "default_half_second")]
    pub situation_interval_secs: f64,
}

fn default_update_delay() -> f64 {
    1.0
}

fn default_half_second() -> f64 {
    0.5
}

/// `Duration::from_secs_f64` panics on non-finite and oversized inputs, so
/// overrides are clamped into [0, one day] before conversion.
const MAX_CADENCE_SECS: f64 = 86_400.0;

fn clamp_cadence(secs: f64) -> Duration {
    if !secs.is_finite() {
        return Duration::from_secs(MAX_CADENCE_SECS as u64);
    }
    Duration::from_secs_f64(secs.clamp(0.0, MAX_CADENCE_SECS))
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            update_delay_secs: default_update_delay(),
            filter_interval_secs: default_half_second(),
            situation_interval_secs: default_half_second(),
        }
    }
}

impl SchedulerSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    pub fn update_delay(&self) -> Duration {
        clamp_cadence(self.update_delay_secs)
    }

    pub fn filter_interval(&self) -> Duration {
        clamp_cadence(self.filter_interval_secs)
    }

    pub fn situation_interval(&self) -> Duration {
        clamp_cadence(self.situation_interval_secs)
    }
}
