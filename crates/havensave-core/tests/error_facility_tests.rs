use havensave_core::errors::{ExError, ExErrorKind, HavenError};

#[test]
fn test_source_missing_carries_path() {
    let err = HavenError::SourceMissing {
        path: "/saves/slot1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::SourceMissing);
    assert_eq!(ex_err.code(), "ERR_SOURCE_MISSING");
    assert_eq!(ex_err.path(), Some("/saves/slot1"));
    assert_eq!(ex_err.op(), Some("create_backup"));
}

#[test]
fn test_document_parse_maps_to_invalid_document() {
    let err = HavenError::DocumentParse {
        source_id: "game".to_string(),
        message: "unexpected end of stream".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDocument);
    assert_eq!(ex_err.code(), "ERR_INVALID_DOCUMENT");
    assert!(ex_err.message().contains("unexpected end"));
}

#[test]
fn test_parse_unavailable_names_side() {
    let ex_err: ExError = HavenError::ParseUnavailable {
        side: "baseline".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_PARSE_UNAVAILABLE");
    assert!(ex_err.message().contains("baseline"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::ParseUnavailable, "ERR_PARSE_UNAVAILABLE"),
        (ExErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
        (ExErrorKind::InvalidCatalog, "ERR_INVALID_CATALOG"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serde_errors_become_serialization() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: HavenError = json_err.into();
    assert!(matches!(err, HavenError::Serialization { .. }));
}
