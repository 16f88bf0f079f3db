//! tfdoc's entry point.
//! Loads a module with options layered from defaults, the module's config
//! file and command-line flags, then prints the model as JSON.

use tfdoc::{
    cli::{get_args, Args},
    config::{load_config_file, Options},
    error::{default_error_handler, Error, Result},
    loader::load_with_options,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads the config file from the module directory, if any
/// 2. Layers command-line overrides on top of it
/// 3. Loads the module
/// 4. Prints the model as pretty JSON
fn run(args: Args) -> Result<()> {
    let file_overrides = load_config_file(&args.path)?.unwrap_or_default();
    let options = Options::default().with(&file_overrides.then(&args.overrides()))?;

    let module = load_with_options(&options)?;
    let json = serde_json::to_string_pretty(&module)
        .map_err(|e| Error::IoError(e.into()))?;
    println!("{}", json);
    Ok(())
}
