//! Output resolution and value enrichment.
//!
//! Outputs are taken from the parsed module. When output values are
//! enabled, each output also gets its value from a JSON document mapping
//! output names to values. Entries may be bare values or the objects
//! written by `terraform output -json`:
//!
//! ```json
//! { "vpc_id": { "sensitive": false, "type": "string", "value": "vpc-1234" } }
//! ```

use crate::comments::{FileCommentLookup, LineCommentLookup};
use crate::config::Options;
use crate::constants::SENSITIVE_VALUE;
use crate::error::{Error, Result};
use crate::model::Output;
use crate::parser::RawModule;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// An entry in the `terraform output -json` format.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TerraformOutput {
    #[serde(default)]
    sensitive: bool,
    #[serde(rename = "type", default)]
    _kind: Option<serde_json::Value>,
    value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValueEntry {
    Terraform(TerraformOutput),
    Raw(serde_json::Value),
}

/// A value read from the output values document.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputValue {
    pub sensitive: bool,
    pub value: serde_json::Value,
}

impl From<ValueEntry> for OutputValue {
    fn from(entry: ValueEntry) -> Self {
        match entry {
            ValueEntry::Terraform(output) => Self { sensitive: output.sensitive, value: output.value },
            ValueEntry::Raw(value) => Self { sensitive: false, value },
        }
    }
}

/// Reads the output values document.
///
/// # Errors
/// * `Error::ValuesFileError` if the file cannot be read or is not a JSON object
pub fn load_output_values<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, OutputValue>> {
    let path = path.as_ref();
    let values_error = |message: String| Error::ValuesFileError {
        path: path.display().to_string(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| values_error(e.to_string()))?;
    let entries: IndexMap<String, ValueEntry> =
        serde_json::from_str(&content).map_err(|e| values_error(e.to_string()))?;

    debug!("Loaded {} output value(s) from {}", entries.len(), path.display());
    Ok(entries.into_iter().map(|(name, entry)| (name, entry.into())).collect())
}

/// Builds the module outputs, looking up undocumented ones in the source
/// comments.
///
/// # Errors
/// * `Error::ValuesFileError` if output values are enabled and the values
///   document cannot be loaded, even when the module declares no outputs
pub fn load_outputs(module: &RawModule, options: &Options) -> Result<Vec<Output>> {
    resolve_outputs(module, options, &FileCommentLookup)
}

/// [`load_outputs`] with a custom comment lookup.
pub fn resolve_outputs(
    module: &RawModule,
    options: &Options,
    comments: &dyn LineCommentLookup,
) -> Result<Vec<Output>> {
    let values = if options.output_values {
        let path = options.output_values_path.as_deref().ok_or_else(|| Error::ValuesFileError {
            path: String::new(),
            message: "no output values path given".to_string(),
        })?;
        Some(load_output_values(path)?)
    } else {
        None
    };

    let outputs: Vec<Output> = module
        .outputs
        .iter()
        .map(|raw| {
            let description = match &raw.description {
                Some(description) => description.clone(),
                None => comments.comments_before(&raw.position.filename, raw.position.line),
            };

            let value = values.as_ref().map(|values| match values.get(&raw.name) {
                Some(entry) if raw.sensitive || entry.sensitive => {
                    serde_json::Value::String(SENSITIVE_VALUE.to_string())
                }
                Some(entry) => entry.value.clone(),
                None => serde_json::Value::Null,
            });

            Output {
                name: raw.name.clone(),
                description,
                sensitive: raw.sensitive,
                show_value: value.is_some(),
                value,
                position: raw.position.clone(),
            }
        })
        .collect();

    debug!("Loaded {} output(s), values shown: {}", outputs.len(), values.is_some());
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use crate::parser::RawOutput;
    use std::path::PathBuf;

    struct FixedLookup;

    impl LineCommentLookup for FixedLookup {
        fn comments_before(&self, _filename: &Path, line_number: usize) -> String {
            format!("comment at {}", line_number)
        }
    }

    fn raw_output(name: &str, description: Option<&str>, line: usize) -> RawOutput {
        RawOutput {
            name: name.to_string(),
            description: description.map(str::to_string),
            sensitive: false,
            position: Position { filename: PathBuf::from("outputs.tf"), line },
        }
    }

    #[test]
    fn test_comment_fallback_only_without_description() {
        let module = RawModule {
            outputs: vec![raw_output("a", Some("declared"), 1), raw_output("b", None, 7)],
            ..RawModule::default()
        };
        let outputs = resolve_outputs(&module, &Options::default(), &FixedLookup).unwrap();

        assert_eq!(outputs[0].description, "declared");
        assert_eq!(outputs[1].description, "comment at 7");
        assert!(outputs.iter().all(|o| !o.show_value && o.value.is_none()));
    }

    #[test]
    fn test_value_entry_shapes() {
        let entries: IndexMap<String, ValueEntry> = serde_json::from_str(
            r#"{
                "wrapped": {"sensitive": true, "type": "string", "value": "x"},
                "bare": [1, 2],
                "object": {"value": 1, "other": 2}
            }"#,
        )
        .unwrap();
        let values: IndexMap<String, OutputValue> =
            entries.into_iter().map(|(k, v)| (k, v.into())).collect();

        assert_eq!(values["wrapped"], OutputValue { sensitive: true, value: "x".into() });
        assert_eq!(values["bare"], OutputValue { sensitive: false, value: serde_json::json!([1, 2]) });
        assert_eq!(
            values["object"],
            OutputValue { sensitive: false, value: serde_json::json!({"value": 1, "other": 2}) }
        );
    }
}
