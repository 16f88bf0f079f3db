//! Command-line interface implementation for tfdoc.
//! Provides argument parsing using clap and turns the flags into option
//! overrides.

use crate::config::{OptionsOverride, SortByOverride};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for tfdoc.
#[derive(Parser, Debug)]
#[command(author, version, about = "tfdoc: inspect the documentation model of a Terraform module", long_about = None)]
pub struct Args {
    /// Path to the module directory
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// File whose leading comment is the module header, relative to PATH
    #[arg(long, value_name = "FILE")]
    pub header_from: Option<PathBuf>,

    /// Show output values read from the values document
    #[arg(long)]
    pub output_values: bool,

    /// JSON document with output values, e.g. from `terraform output -json`
    #[arg(long, value_name = "FILE")]
    pub output_values_path: Option<PathBuf>,

    /// Sort items by name
    #[arg(long)]
    pub sort_by_name: bool,

    /// Sort required inputs before optional ones
    #[arg(long)]
    pub sort_by_required: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Option overrides for the flags that were given.
    ///
    /// Boolean flags only override when set, so values from a config file
    /// survive an absent flag.
    pub fn overrides(&self) -> OptionsOverride {
        let sort_by = (self.sort_by_name || self.sort_by_required).then(|| SortByOverride {
            name: self.sort_by_name.then_some(true),
            required: self.sort_by_required.then_some(true),
        });

        OptionsOverride {
            path: Some(self.path.clone()),
            header_from: self.header_from.clone(),
            output_values: self.output_values.then_some(true),
            output_values_path: self.output_values_path.clone(),
            sort_by,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
