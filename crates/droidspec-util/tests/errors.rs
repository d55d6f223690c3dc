use droidspec_util::errors::DescriptorError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = DescriptorError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_syntax_error_display() {
    let err = DescriptorError::Syntax {
        message: "unexpected token at line 3".to_string(),
    };
    assert_eq!(err.to_string(), "Syntax error: unexpected token at line 3");
}

#[test]
fn test_missing_field_names_the_field() {
    let err = DescriptorError::MissingField {
        field: "application.namespace".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Missing required field `application.namespace`"
    );
}

#[test]
fn test_constraint_names_field_and_reason() {
    let err = DescriptorError::Constraint {
        field: "sdk.target".to_string(),
        reason: "target SDK 37 exceeds compile SDK 36".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid value for `sdk.target`: target SDK 37 exceeds compile SDK 36"
    );
}

#[test]
fn test_toolchain_error_display() {
    let err = DescriptorError::Toolchain {
        message: "not found".to_string(),
    };
    assert_eq!(err.to_string(), "Toolchain error: not found");
}

#[test]
fn test_generic_error_display() {
    let err = DescriptorError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: DescriptorError = io_err.into();
    matches!(err, DescriptorError::Io(_));
}
