//! Options governing how a module is loaded.
//! Options start from defaults and are layered with partial overrides,
//! either built in code or read from a `.tfdoc.{json,yml,yaml}` file.

use crate::constants::{CONFIG_FILES, DEFAULT_HEADER_FILE};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Two independent sort axes. Both false keeps source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortBy {
    /// Case-sensitive ascending order by name
    pub name: bool,
    /// Required inputs before optional ones
    pub required: bool,
}

/// Settings for a single module load.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Module directory
    pub path: PathBuf,
    /// File whose leading comment is the module header, relative to `path`
    pub header_from: PathBuf,
    /// Whether outputs are enriched from a values document
    pub output_values: bool,
    /// Values document, required when `output_values` is set
    pub output_values_path: Option<PathBuf>,
    pub sort_by: SortBy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            header_from: PathBuf::from(DEFAULT_HEADER_FILE),
            output_values: false,
            output_values_path: None,
            sort_by: SortBy::default(),
        }
    }
}

/// Partial [`SortBy`]; each axis overrides independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SortByOverride {
    pub name: Option<bool>,
    pub required: Option<bool>,
}

/// Partial [`Options`]. Only fields set to `Some` replace the base value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OptionsOverride {
    pub path: Option<PathBuf>,
    pub header_from: Option<PathBuf>,
    pub output_values: Option<bool>,
    pub output_values_path: Option<PathBuf>,
    pub sort_by: Option<SortByOverride>,
}

impl OptionsOverride {
    /// Layers `later` on top of these overrides; fields set in `later` win.
    pub fn then(&self, later: &OptionsOverride) -> OptionsOverride {
        let sort_by = match (self.sort_by, later.sort_by) {
            (Some(earlier), Some(later)) => Some(SortByOverride {
                name: later.name.or(earlier.name),
                required: later.required.or(earlier.required),
            }),
            (earlier, later) => later.or(earlier),
        };

        OptionsOverride {
            path: later.path.clone().or_else(|| self.path.clone()),
            header_from: later.header_from.clone().or_else(|| self.header_from.clone()),
            output_values: later.output_values.or(self.output_values),
            output_values_path: later
                .output_values_path
                .clone()
                .or_else(|| self.output_values_path.clone()),
            sort_by,
        }
    }
}

impl Options {
    /// Returns a copy of these options with every field set in `overrides`
    /// replaced.
    ///
    /// # Errors
    /// * `Error::ConfigError` if output values are enabled without a values path
    pub fn with(&self, overrides: &OptionsOverride) -> Result<Options> {
        let mut merged = self.clone();

        if let Some(path) = &overrides.path {
            merged.path = path.clone();
        }
        if let Some(header_from) = &overrides.header_from {
            merged.header_from = header_from.clone();
        }
        if let Some(output_values) = overrides.output_values {
            merged.output_values = output_values;
        }
        if let Some(output_values_path) = &overrides.output_values_path {
            merged.output_values_path = Some(output_values_path.clone());
        }
        if let Some(sort_by) = overrides.sort_by {
            if let Some(name) = sort_by.name {
                merged.sort_by.name = name;
            }
            if let Some(required) = sort_by.required {
                merged.sort_by.required = required;
            }
        }

        merged.validate()?;
        Ok(merged)
    }

    /// Checks option combinations that cannot be loaded.
    pub fn validate(&self) -> Result<()> {
        let has_values_path = self
            .output_values_path
            .as_ref()
            .is_some_and(|path| !path.as_os_str().is_empty());
        if self.output_values && !has_values_path {
            return Err(Error::ConfigError(
                "output-values-path is required when output-values is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses the content of a config file.
///
/// JSON is tried first, YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<OptionsOverride> {
    match serde_json::from_str(content) {
        Ok(overrides) => Ok(overrides),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads overrides from the first config file found in `module_dir`.
///
/// # Returns
/// * `Ok(None)` when the directory has no config file
///
/// # Errors
/// * `Error::ConfigError` if the file exists but cannot be parsed
/// * `Error::IoError` if the file exists but cannot be read
pub fn load_config_file<P: AsRef<Path>>(module_dir: P) -> Result<Option<OptionsOverride>> {
    for file in CONFIG_FILES {
        let config_path = module_dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_config(&content).map(Some);
        }
    }

    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.path, PathBuf::from("."));
        assert_eq!(options.header_from, PathBuf::from("main.tf"));
        assert!(!options.output_values);
        assert_eq!(options.output_values_path, None);
        assert_eq!(options.sort_by, SortBy { name: false, required: false });
    }

    #[test]
    fn test_sort_axes_override_independently() {
        let base = Options {
            sort_by: SortBy { name: true, required: false },
            ..Options::default()
        };
        let merged = base
            .with(&OptionsOverride {
                sort_by: Some(SortByOverride { name: None, required: Some(true) }),
                ..OptionsOverride::default()
            })
            .unwrap();

        assert_eq!(merged.sort_by, SortBy { name: true, required: true });
    }

    #[test]
    fn test_layered_overrides_keep_earlier_fields() {
        let file = OptionsOverride {
            output_values: Some(true),
            sort_by: Some(SortByOverride { name: Some(true), required: None }),
            ..OptionsOverride::default()
        };
        let flags = OptionsOverride {
            output_values_path: Some(PathBuf::from("values.json")),
            sort_by: Some(SortByOverride { name: None, required: Some(true) }),
            ..OptionsOverride::default()
        };
        let merged = Options::default().with(&file.then(&flags)).unwrap();

        assert!(merged.output_values);
        assert_eq!(merged.output_values_path, Some(PathBuf::from("values.json")));
        assert_eq!(merged.sort_by, SortBy { name: true, required: true });
    }
}
