use std::io;

use nfogen::error::NfoError;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let nfo_err: NfoError = io_err.into();

    match nfo_err {
        NfoError::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = NfoError::UndefinedVariable { name: "titleName".to_string() };
    assert_eq!(
        err.to_string(),
        "Undefined variable: titleName is not present in the context."
    );

    let err = NfoError::LayoutCountMismatch { expected: 4, actual: 3 };
    assert_eq!(err.to_string(), "Layout mismatch: grid needs 4 items but got 3.");

    let err = NfoError::InvalidFormatSpec { spec: "bogus".to_string() };
    assert_eq!(err.to_string(), "Invalid format spec: \"bogus\".");

    let err = NfoError::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");
}
