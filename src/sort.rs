//! Ordering of module collections.

use crate::config::SortBy;
use crate::model::{Input, Module, Provider};
use log::debug;
use std::cmp::Ordering;

/// Reorders inputs, outputs and providers of `module` in place.
///
/// * `required`: required inputs first, each partition kept in source
///   order or sorted by name if `name` is also set
/// * `name` alone: case-sensitive ascending by name
/// * neither: source order
///
/// Outputs and providers have no required axis and only follow `name`.
/// The required and optional views are re-derived from the sorted inputs.
pub fn sort_items(module: &mut Module, sort_by: SortBy) {
    debug!("Sorting module items by {:?}", sort_by);

    sort_inputs(&mut module.inputs, sort_by);
    module.derive_input_partitions();

    if sort_by.name {
        module.outputs.sort_by(|a, b| a.name.cmp(&b.name));
        module.providers.sort_by(compare_providers);
    } else {
        module.outputs.sort_by(|a, b| a.position.cmp(&b.position));
        module.providers.sort_by(|a, b| a.position.cmp(&b.position));
    }
}

fn sort_inputs(inputs: &mut [Input], sort_by: SortBy) {
    inputs.sort_by(|a, b| {
        let partition = if sort_by.required {
            b.required.cmp(&a.required)
        } else {
            Ordering::Equal
        };
        partition.then_with(|| {
            if sort_by.name {
                a.name.cmp(&b.name)
            } else {
                a.position.cmp(&b.position)
            }
        })
    });
}

fn compare_providers(a: &Provider, b: &Provider) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.alias.cmp(&b.alias))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use std::path::PathBuf;

    fn input(name: &str, required: bool, line: usize) -> Input {
        Input {
            name: name.to_string(),
            type_name: "string".to_string(),
            description: String::new(),
            default: (!required).then(|| "\"x\"".to_string()),
            required,
            position: Position { filename: PathBuf::from("variables.tf"), line },
        }
    }

    fn module(inputs: Vec<Input>) -> Module {
        let mut module = Module { inputs, ..Module::default() };
        module.derive_input_partitions();
        module
    }

    fn names(inputs: &[Input]) -> Vec<&str> {
        inputs.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_required_first_keeps_source_order_within_partitions() {
        let mut module = module(vec![
            input("A", true, 1),
            input("B", false, 2),
            input("C", false, 3),
            input("D", false, 4),
            input("E", false, 5),
            input("F", true, 6),
        ]);
        sort_items(&mut module, SortBy { name: false, required: true });

        assert_eq!(names(&module.inputs), vec!["A", "F", "B", "C", "D", "E"]);
        assert_eq!(names(&module.required_inputs), vec!["A", "F"]);
        assert_eq!(names(&module.optional_inputs), vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn test_name_sort_is_case_sensitive() {
        let mut module =
            module(vec![input("b", true, 1), input("B", true, 2), input("a", false, 3)]);
        sort_items(&mut module, SortBy { name: true, required: false });

        assert_eq!(names(&module.inputs), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_no_policy_restores_source_order() {
        let mut module = module(vec![input("Z", true, 1), input("A", false, 2)]);
        sort_items(&mut module, SortBy { name: true, required: false });
        sort_items(&mut module, SortBy::default());

        assert_eq!(names(&module.inputs), vec!["Z", "A"]);
    }
}
