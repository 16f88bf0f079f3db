//! Documentation model produced by a module load.

use serde::Serialize;
use std::path::PathBuf;

/// Location of a declaration in the module source.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub filename: PathBuf,
    /// 1-based line of the block keyword
    pub line: usize,
}

/// A declared module parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    /// Literal default as written in the source, `None` when undeclared
    pub default: Option<String>,
    pub required: bool,
    pub position: Position,
}

impl Input {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A declared module output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    pub name: String,
    pub description: String,
    pub sensitive: bool,
    pub show_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    pub position: Position,
}

/// A provider used by the module's resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub name: String,
    pub alias: Option<String>,
    pub source: Option<String>,
    pub version: Option<String>,
    pub position: Position,
}

impl Provider {
    /// `name` or `name.alias`
    pub fn full_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}.{}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

/// A version constraint on terraform itself or on a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: String,
    pub version: Option<String>,
}

/// Everything extracted from one module directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Module {
    pub header: String,
    pub inputs: Vec<Input>,
    pub required_inputs: Vec<Input>,
    pub optional_inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub providers: Vec<Provider>,
    pub requirements: Vec<Requirement>,
}

impl Module {
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn has_required_inputs(&self) -> bool {
        !self.required_inputs.is_empty()
    }

    pub fn has_optional_inputs(&self) -> bool {
        !self.optional_inputs.is_empty()
    }

    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// Rebuilds the required and optional views from `inputs`, keeping its order.
    pub(crate) fn derive_input_partitions(&mut self) {
        let (required, optional) = partition_inputs(&self.inputs);
        self.required_inputs = required;
        self.optional_inputs = optional;
    }
}

/// Splits inputs into (required, optional), preserving relative order.
pub(crate) fn partition_inputs(inputs: &[Input]) -> (Vec<Input>, Vec<Input>) {
    inputs.iter().cloned().partition(|input| input.required)
}
