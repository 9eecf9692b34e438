#![allow(clippy::unwrap_used, clippy::expect_used)]

use structcmp_core::{Difference, ExError, ExErrorKind, StructCmpError};

#[test]
fn test_invalid_argument_maps_to_invalid_input() {
    let err = Difference::try_from_description(None).unwrap_err();
    let ex: ExError = err.clone().into();

    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex.message(), err.to_string());
    assert!(ex.path().is_none());
}

#[test]
fn test_io_error_keeps_path() {
    let err = StructCmpError::Io {
        path: "missing.json".to_string(),
        message: "No such file or directory".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to read missing.json: No such file or directory"
    );

    let ex = ExError::from(err).with_op("read_document");
    assert_eq!(ex.kind(), ExErrorKind::Io);
    assert_eq!(ex.path(), Some("missing.json"));
    assert_eq!(ex.op(), Some("read_document"));
    assert!(ex.to_string().starts_with("[ERR_IO] in operation 'read_document'"));
}

#[test]
fn test_json_error_is_serialization() {
    let ex: ExError = StructCmpError::Json {
        path: "a.json".to_string(),
        message: "expected value".to_string(),
    }
    .into();
    assert_eq!(ex.kind(), ExErrorKind::Serialization);
    assert_eq!(ex.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_display_without_op_or_path() {
    let ex = ExError::new(ExErrorKind::InvalidInput).with_message("unknown logging profile");
    assert_eq!(ex.to_string(), "[ERR_INVALID_INPUT]: unknown logging profile");
}
