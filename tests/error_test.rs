use std::io;

use archetype::error::Error;

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
    let err = Error::SpecParseError("missing field `condition`".to_string());
    assert_eq!(err.to_string(), "Failed to parse transformations spec: missing field `condition`.");

    let err = Error::DestinationNotEmptyError { destination: "out".to_string() };
    assert_eq!(err.to_string(), "Destination 'out' is not empty, aborting.");

    let err = Error::HookExecutionError {
        command: "false".to_string(),
        reason: "exited with exit status: 1".to_string(),
    };
    assert_eq!(err.to_string(), "Hook 'false' failed: exited with exit status: 1.");
}
