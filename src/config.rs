//! Run configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```
//! use cpu_schedule_sim::config::{OutputFormat, SimulationConfig};
//!
//! let config = SimulationConfig::from_json_str(r#"{ "seed": 7, "policy": 3, "quantum": 2 }"#).unwrap();
//! assert_eq!(config.task_count, 100);
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.format, OutputFormat::Text);
//! ```

use serde::Deserialize;

use crate::generator::DEFAULT_TASK_COUNT;

/// How the trace is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per event.
    #[default]
    Text,
    /// The trace as a JSON document.
    Json,
}

/// Settings for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tasks per workload.
    pub task_count: usize,
    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Menu number of the policy. `None` asks interactively.
    pub policy: Option<i64>,
    /// Round-Robin quantum. `None` asks interactively.
    pub quantum: Option<i64>,
    /// Delay between printed trace lines (ms). Display only.
    pub pace_ms: u64,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            task_count: DEFAULT_TASK_COUNT,
            seed: None,
            policy: None,
            quantum: None,
            pace_ms: 0,
            format: OutputFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
