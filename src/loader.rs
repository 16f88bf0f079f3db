//! Module loading.
//! Parses a module directory and assembles the documentation model from
//! its header, inputs, outputs, providers and requirements.

use crate::comments::{FileCommentLookup, LineCommentLookup};
use crate::config::Options;
use crate::error::Result;
use crate::header::load_header;
use crate::inputs::load_inputs;
use crate::model::Module;
use crate::outputs::resolve_outputs;
use crate::parser::{ConfigParser, HclParser, RawModule};
use crate::providers::{load_providers, load_requirements};
use crate::sort::sort_items;
use log::debug;
use std::path::Path;

/// Loads modules with a given parser and comment lookup.
pub struct ModuleLoader<'a> {
    parser: &'a dyn ConfigParser,
    comments: &'a dyn LineCommentLookup,
}

impl<'a> ModuleLoader<'a> {
    pub fn new(parser: &'a dyn ConfigParser, comments: &'a dyn LineCommentLookup) -> Self {
        Self { parser, comments }
    }

    /// Loads the module at `options.path`, sorted by `options.sort_by`.
    ///
    /// # Errors
    /// * `Error::PathNotFound` if the module directory does not exist
    /// * `Error::ParseError` if the module source is missing or malformed
    /// * `Error::ValuesFileError` if output values are enabled and the
    ///   values document cannot be loaded
    pub fn load(&self, options: &Options) -> Result<Module> {
        debug!("Loading module from {}", options.path.display());
        let raw = self.parser.parse_dir(&options.path)?;
        let mut module = build_module(&raw, options, self.comments)?;
        sort_items(&mut module, options.sort_by);
        Ok(module)
    }
}

/// Parses the module directory at `path` with the HCL parser.
///
/// # Errors
/// * `Error::PathNotFound` if `path` is not a directory
/// * `Error::ParseError` if there is no source file or one is malformed
pub fn load_module<P: AsRef<Path>>(path: P) -> Result<RawModule> {
    HclParser::new()?.parse_dir(path.as_ref())
}

/// Builds the unsorted model from an already parsed module.
///
/// # Errors
/// * `Error::ValuesFileError` if output values are enabled and the values
///   document cannot be loaded
pub fn load_module_items(raw: &RawModule, options: &Options) -> Result<Module> {
    build_module(raw, options, &FileCommentLookup)
}

fn build_module(
    raw: &RawModule,
    options: &Options,
    comments: &dyn LineCommentLookup,
) -> Result<Module> {
    let header = load_header(raw.path.join(&options.header_from));
    let (inputs, required_inputs, optional_inputs) = load_inputs(raw);
    let outputs = resolve_outputs(raw, options, comments)?;
    let providers = load_providers(raw);
    let requirements = load_requirements(raw);

    Ok(Module {
        header,
        inputs,
        required_inputs,
        optional_inputs,
        outputs,
        providers,
        requirements,
    })
}

/// Loads, assembles and sorts the module described by `options`.
pub fn load_with_options(options: &Options) -> Result<Module> {
    let parser = HclParser::new()?;
    ModuleLoader::new(&parser, &FileCommentLookup).load(options)
}
