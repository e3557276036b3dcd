use locus_core::errors::*;

#[test]
fn timeout_carries_budget() {
    let err = RemoteError::Timeout { after_ms: 5000 };
    assert!(err.to_string().contains("5000"));
    assert!(!err.is_rejection());
}

#[test]
fn quota_and_key_errors_are_rejections() {
    assert!(RemoteError::Quota { reason: "daily".into() }.is_rejection());
    assert!(RemoteError::InvalidKey { reason: "revoked".into() }.is_rejection());
    assert!(!RemoteError::Network { reason: "offline".into() }.is_rejection());
}

#[test]
fn malformed_data_carries_key() {
    let err = LocusError::MalformedData {
        key: "locus:history".into(),
        reason: "expected array".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("locus:history"));
    assert!(msg.contains("expected array"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_locus_error() {
    let err: LocusError = StorageError::Sqlite {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, LocusError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn remote_error_converts_to_locus_error() {
    let err: LocusError = RemoteError::Network {
        reason: "dns".into(),
    }
    .into();
    assert!(matches!(err, LocusError::RemoteError(_)));
}

#[test]
fn serde_error_converts_to_locus_error() {
    let serde_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
    let err: LocusError = serde_err.into();
    assert!(matches!(err, LocusError::SerializationError(_)));
}
