use serde::{Deserialize, Serialize};

pub const INTERVAL_MIN_HOURS: f64 = 0.01;
pub const INTERVAL_MAX_HOURS: f64 = 4.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User preferences, persisted as the `notificationSettings` blob. Field
/// names on the wire (`enabled`, `interval`, `meta`) follow the stored
/// record; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(rename = "enabled", default = "default_enabled")]
    pub notifications_enabled: bool,
    #[serde(rename = "interval", default = "default_interval")]
    pub interval_hours: f64,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "meta", default = "default_goal")]
    pub goal: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: default_enabled(),
            interval_hours: default_interval(),
            theme: Theme::default(),
            name: String::new(),
            goal: default_goal(),
        }
    }
}

impl Settings {
    /// Rejects numeric values the stored record must never hold. The
    /// original app coerced these silently; here a bad interval is refused
    /// up front instead of persisting a NaN-ish state.
    pub fn validate(&self) -> Result<(), String> {
        if !self.interval_hours.is_finite() {
            return Err("interval must be a finite number of hours".to_string());
        }
        if self.interval_hours < INTERVAL_MIN_HOURS || self.interval_hours > INTERVAL_MAX_HOURS {
            return Err(format!(
                "interval must be between {INTERVAL_MIN_HOURS} and {INTERVAL_MAX_HOURS} hours"
            ));
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}

fn default_interval() -> f64 {
    1.0
}

fn default_goal() -> u32 {
    8
}
