use std::io;

use tfdoc::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config");

    let err = Error::PathNotFound { path: "modules/vpc".to_string() };
    assert_eq!(err.to_string(), "Module path not found: modules/vpc");

    let err = Error::ValuesFileError {
        path: "values.json".to_string(),
        message: "missing".to_string(),
    };
    assert_eq!(err.to_string(), "Output values error in 'values.json': missing");
}
