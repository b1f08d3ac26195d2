//! Demo parameters.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! reproduces the fixed demos exactly.

use crate::error::{ConfigError, Result as DemoResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub payload: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            payload: "Report Data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BirdsConfig {
    pub parrot: String,
    pub penguin: String,
}

impl Default for BirdsConfig {
    fn default() -> Self {
        BirdsConfig {
            parrot: "Parrot".to_string(),
            penguin: "Penguin".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapesConfig {
    pub circle_radius: f64,
    pub rectangle_length: f64,
    pub rectangle_width: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        ShapesConfig {
            circle_radius: 5.0,
            rectangle_length: 5.0,
            rectangle_width: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmployeeConfig {
    pub name: String,
    pub hourly_rate: f64,
    pub hours_worked: u32,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        EmployeeConfig {
            name: "John".to_string(),
            hourly_rate: 20.0,
            hours_worked: 40,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub report: ReportConfig,
    pub birds: BirdsConfig,
    pub shapes: ShapesConfig,
    pub employee: EmployeeConfig,
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` when given, otherwise the fixed demo defaults.
    pub fn load(path: Option<&Path>) -> DemoResult<Self> {
        match path {
            Some(path) => Ok(Self::from_file(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Checks the loaded values; reports the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_name("birds.parrot", &self.birds.parrot)?;
        require_name("birds.penguin", &self.birds.penguin)?;
        require_name("employee.name", &self.employee.name)?;

        require_non_negative("shapes.circle_radius", self.shapes.circle_radius)?;
        require_non_negative("shapes.rectangle_length", self.shapes.rectangle_length)?;
        require_non_negative("shapes.rectangle_width", self.shapes.rectangle_width)?;
        require_non_negative("employee.hourly_rate", self.employee.hourly_rate)?;
        Ok(())
    }
}

fn require_name(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid_value(field, "must not be empty"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid_value(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid_value(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
