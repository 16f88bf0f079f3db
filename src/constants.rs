//! Common constants used throughout tfdoc.

/// File read for the module header unless overridden
pub const DEFAULT_HEADER_FILE: &str = "main.tf";

/// Glob matched against file names to find module sources
pub const SOURCE_FILE_GLOB: &str = "*.tf";

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = [".tfdoc.json", ".tfdoc.yml", ".tfdoc.yaml"];

/// Value shown in place of a sensitive output
pub const SENSITIVE_VALUE: &str = "<sensitive>";

/// Type reported for a variable that declares none
pub const DEFAULT_INPUT_TYPE: &str = "any";
