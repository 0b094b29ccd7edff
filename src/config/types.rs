use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub devtools: DevtoolsConfig,
}

/// Settings for the terminal demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Count the store is seeded with at startup (default: 0).
    #[serde(default)]
    pub initial_count: u64,
}

/// Devtools settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevtoolsConfig {
    /// Record dispatches for the history panel (default: true).
    #[serde(default = "default_devtools_enabled")]
    pub enabled: bool,
    /// Maximum number of dispatches kept in the recorder (default: 100).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_devtools_enabled() -> bool {
    true
}

fn default_history_limit() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            devtools: DevtoolsConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_count: 0,
        }
    }
}

impl Default for DevtoolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_devtools_enabled(),
            history_limit: default_history_limit(),
        }
    }
}
