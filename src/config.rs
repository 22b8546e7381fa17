//! Describer configuration
//!
//! Defaults suit the 250 m global layers. Each value can be overridden from
//! the environment:
//! - `GEODESCRIBER_CELL_SIZE`: cell size when an input omits it
//! - `GEODESCRIBER_MIN_CELLS`: smallest polygon that gets a narrative
//! - `GEODESCRIBER_MAX_ATTEMPTS`: attempts per polygon on malformed records
//! - `GEODESCRIBER_SUMMARIES`: append the layer summaries paragraph
//! - `GEODESCRIBER_HTML`: wrap output text in `<p>` tags

use serde::Deserialize;

use crate::narrative::generator::DEFAULT_MIN_CELLS;

pub const DEFAULT_CELL_SIZE: f64 = 231.9156058;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescriberConfig {
    pub cell_size: f64,
    pub min_cells: u64,
    pub max_attempts: u32,
    pub include_summaries: bool,
    pub html: bool,
}

impl Default for DescriberConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_cells: DEFAULT_MIN_CELLS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            include_summaries: false,
            html: false,
        }
    }
}

impl DescriberConfig {
    /// Configuration from `GEODESCRIBER_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(default)
        };
        Self {
            cell_size: lookup("GEODESCRIBER_CELL_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cell_size),
            min_cells: lookup("GEODESCRIBER_MIN_CELLS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.min_cells),
            max_attempts: lookup("GEODESCRIBER_MAX_ATTEMPTS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(defaults.max_attempts),
            include_summaries: flag("GEODESCRIBER_SUMMARIES", defaults.include_summaries),
            html: flag("GEODESCRIBER_HTML", defaults.html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DescriberConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DescriberConfig::default());
        assert_eq!(config.min_cells, 16);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_overrides() {
        let config = DescriberConfig::from_lookup(lookup(&[
            ("GEODESCRIBER_CELL_SIZE", "30.0"),
            ("GEODESCRIBER_MIN_CELLS", "100"),
            ("GEODESCRIBER_SUMMARIES", "true"),
            ("GEODESCRIBER_HTML", "1"),
        ]));
        assert_eq!(config.cell_size, 30.0);
        assert_eq!(config.min_cells, 100);
        assert!(config.include_summaries);
        assert!(config.html);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = DescriberConfig::from_lookup(lookup(&[
            ("GEODESCRIBER_MIN_CELLS", "many"),
            ("GEODESCRIBER_MAX_ATTEMPTS", "0"),
        ]));
        assert_eq!(config.min_cells, 16);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DescriberConfig = serde_json::from_str(r#"{"min_cells": 4}"#).unwrap();
        assert_eq!(config.min_cells, 4);
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
    }
}
