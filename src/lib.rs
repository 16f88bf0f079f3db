//! tfdoc extracts a documentation model from a Terraform module directory:
//! the header comment, inputs split into required and optional, outputs
//! (optionally with their values), the providers in use and version
//! requirements. Renderers consume the resulting [`model::Module`].

/// Command-line interface of the inspection binary
pub mod cli;

/// Comment lookup above a given source line
pub mod comments;

/// Load options and config file handling
/// Supports JSON and YAML formats (.tfdoc.json, .tfdoc.yml, .tfdoc.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Module header extraction
pub mod header;

/// Input classification into required and optional
pub mod inputs;

/// Orchestration of a full module load
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Documentation model types
pub mod model;

/// Output resolution and value enrichment
pub mod outputs;

/// Module source parsing
pub mod parser;

/// Provider and requirement extraction
pub mod providers;

/// Ordering of module collections
pub mod sort;
