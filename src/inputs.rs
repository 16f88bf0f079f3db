//! Input classification.

use crate::constants::DEFAULT_INPUT_TYPE;
use crate::model::{partition_inputs, Input};
use crate::parser::RawModule;
use log::debug;

/// Builds the module inputs in source order, together with the required
/// (no default) and optional views over them.
pub fn load_inputs(module: &RawModule) -> (Vec<Input>, Vec<Input>, Vec<Input>) {
    let inputs: Vec<Input> = module
        .variables
        .iter()
        .map(|variable| Input {
            name: variable.name.clone(),
            type_name: variable
                .type_expr
                .clone()
                .unwrap_or_else(|| DEFAULT_INPUT_TYPE.to_string()),
            description: variable.description.clone().unwrap_or_default(),
            default: variable.default.clone(),
            required: variable.default.is_none(),
            position: variable.position.clone(),
        })
        .collect();

    let (required, optional) = partition_inputs(&inputs);
    debug!(
        "Loaded {} input(s): {} required, {} optional",
        inputs.len(),
        required.len(),
        optional.len()
    );
    (inputs, required, optional)
}
