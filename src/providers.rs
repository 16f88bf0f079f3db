//! Provider and requirement extraction.

use crate::model::{Provider, Requirement};
use crate::parser::{ProviderRef, RawModule};
use indexmap::IndexMap;
use log::debug;

/// Collects the providers used by the module's resources and data sources.
///
/// A provider used by several resources is listed once, at the position of
/// the first resource that uses it. Providers with the same name but a
/// different alias are distinct.
pub fn load_providers(module: &RawModule) -> Vec<Provider> {
    let mut discovered: IndexMap<&ProviderRef, Provider> = IndexMap::new();

    for resource in &module.resources {
        let provider = &resource.provider;
        if discovered.contains_key(provider) {
            continue;
        }

        let requirement = module.required_providers.get(&provider.name);
        let version = requirement
            .filter(|r| !r.version_constraints.is_empty())
            .map(|r| r.version_constraints.join(" "));

        discovered.insert(
            provider,
            Provider {
                name: provider.name.clone(),
                alias: provider.alias.clone(),
                source: requirement.and_then(|r| r.source.clone()),
                version,
                position: resource.position.clone(),
            },
        );
    }

    debug!("Loaded {} provider(s)", discovered.len());
    discovered.into_values().collect()
}

/// Collects version requirements: terraform itself first, then every
/// entry of `required_providers`, in source order.
pub fn load_requirements(module: &RawModule) -> Vec<Requirement> {
    let mut requirements = Vec::new();

    if !module.required_core.is_empty() {
        requirements.push(Requirement {
            name: "terraform".to_string(),
            version: Some(module.required_core.join(" ")),
        });
    }

    for (name, requirement) in &module.required_providers {
        let version = (!requirement.version_constraints.is_empty())
            .then(|| requirement.version_constraints.join(" "));
        requirements.push(Requirement { name: name.clone(), version });
    }

    requirements
}
