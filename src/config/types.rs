// Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::display::{
    DEFAULT_CLOSE_DELAY_MS, DEFAULT_INTENT_POLL_INTERVAL_MS, DEFAULT_INTENT_SENSITIVITY,
    DisplayOptions,
};
use crate::tooltip::Placement;

/// Hover-intent timing section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_intent_poll_interval_ms")]
    pub intent_poll_interval_ms: u64,
    #[serde(default = "default_intent_sensitivity")]
    pub intent_sensitivity: u32,
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

fn default_intent_poll_interval_ms() -> u64 {
    DEFAULT_INTENT_POLL_INTERVAL_MS
}

fn default_intent_sensitivity() -> u32 {
    DEFAULT_INTENT_SENSITIVITY
}

fn default_close_delay_ms() -> u64 {
    DEFAULT_CLOSE_DELAY_MS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            intent_poll_interval_ms: default_intent_poll_interval_ms(),
            intent_sensitivity: default_intent_sensitivity(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            intent_poll_interval: Duration::from_millis(self.intent_poll_interval_ms),
            intent_sensitivity: self.intent_sensitivity,
            close_delay: Duration::from_millis(self.close_delay_ms),
        }
    }
}

/// Tooltip popup section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TooltipConfig {
    #[serde(default)]
    pub placement: Placement,
    /// Gap between target and popup, in cells
    #[serde(default = "default_offset")]
    pub offset: u16,
    /// Widest the popup may grow, borders included
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

fn default_offset() -> u16 {
    1
}

fn default_max_width() -> u16 {
    40
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            placement: Placement::default(),
            offset: default_offset(),
            max_width: default_max_width(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
