// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use planlite_geometry::TransformOptions;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Grid snapping for transforms.
    pub snap_to_grid: bool,
    /// Sun azimuth in degrees when none is given on the command line.
    pub azimuth: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: get("PLANLITE_LOG")
                .or_else(|| get("RUST_LOG"))
                .unwrap_or_else(|| "info".into()),
            snap_to_grid: get("PLANLITE_SNAP")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
                .unwrap_or(true),
            azimuth: get("PLANLITE_AZIMUTH")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(90.0),
        }
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            snap_to_grid: self.snap_to_grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]);
        assert_eq!(c.log_filter, "info");
        assert!(c.snap_to_grid);
        assert_eq!(c.azimuth, 90.0);
    }

    #[test]
    fn planlite_log_wins_over_rust_log() {
        let c = config(&[("RUST_LOG", "warn"), ("PLANLITE_LOG", "debug")]);
        assert_eq!(c.log_filter, "debug");
        assert_eq!(config(&[("RUST_LOG", "warn")]).log_filter, "warn");
    }

    #[test]
    fn snap_can_be_disabled() {
        assert!(!config(&[("PLANLITE_SNAP", "off")]).transform_options().snap_to_grid);
        assert!(!config(&[("PLANLITE_SNAP", "0")]).snap_to_grid);
        assert!(config(&[("PLANLITE_SNAP", "yes")]).snap_to_grid);
    }

    #[test]
    fn bad_azimuth_falls_back() {
        assert_eq!(config(&[("PLANLITE_AZIMUTH", "east")]).azimuth, 90.0);
        assert_eq!(config(&[("PLANLITE_AZIMUTH", "180")]).azimuth, 180.0);
    }
}
