//! stickctl configuration
//!
//! Settings come from an optional YAML file; command-line flags override it.
//!
//! ```yaml
//! framing: with_report_id
//! output: json
//! normalized: true
//! skip_malformed: false
//! ```

use std::path::Path;

use flightstick_hid_extreme3d_protocol::ReportFraming;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StickctlConfig {
    pub framing: ReportFraming,
    pub output: OutputFormat,
    /// Show axes scaled to unit ranges.
    pub normalized: bool,
    /// Warn and continue on short reports instead of failing.
    pub skip_malformed: bool,
}

/// Flag values from the command line. `true` always wins over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub json: bool,
    pub report_id: bool,
    pub normalized: bool,
    pub skip_malformed: bool,
}

impl StickctlConfig {
    pub fn from_yaml(text: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfiguration(format!("cannot read '{}': {e}", path.display()))
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise start from defaults, then apply flags.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, CliError> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.json {
            self.output = OutputFormat::Json;
        }
        if overrides.report_id {
            self.framing = ReportFraming::WithReportId;
        }
        self.normalized |= overrides.normalized;
        self.skip_malformed |= overrides.skip_malformed;
        self
    }
}
