//! Versioned, checksummed envelope for persisted cache namespaces.
//!
//! The payload is stored as an embedded JSON string so the blake3 digest is
//! computed over exactly the bytes that were written.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use locus_core::constants::SNAPSHOT_VERSION;
use locus_core::errors::{LocusError, LocusResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// blake3 hex digest of `payload`.
    pub checksum: String,
    pub payload: String,
}

impl Snapshot {
    /// Serialize `value` and seal it with a checksum.
    pub fn seal<T: Serialize>(value: &T) -> LocusResult<Self> {
        let payload = serde_json::to_string(value)?;
        Ok(Self {
            version: SNAPSHOT_VERSION,
            checksum: digest(&payload),
            payload,
        })
    }

    /// Verify version and checksum, then decode the payload.
    /// `key` is only used to label errors.
    pub fn open<T: DeserializeOwned>(&self, key: &str) -> LocusResult<T> {
        if self.version != SNAPSHOT_VERSION {
            return Err(malformed(
                key,
                format!("unsupported snapshot version {}", self.version),
            ));
        }
        if digest(&self.payload) != self.checksum {
            return Err(malformed(key, "checksum mismatch".to_string()));
        }
        serde_json::from_str(&self.payload).map_err(|e| malformed(key, e.to_string()))
    }
}

fn digest(payload: &str) -> String {
    blake3::hash(payload.as_bytes()).to_hex().to_string()
}

fn malformed(key: &str, reason: String) -> LocusError {
    LocusError::MalformedData {
        key: key.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_snapshot_opens() {
        let snapshot = Snapshot::seal(&vec!["a".to_string(), "b".to_string()]).unwrap();
        let back: Vec<String> = snapshot.open("k").unwrap();
        assert_eq!(back, vec!["a", "b"]);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let mut snapshot = Snapshot::seal(&vec![1u32, 2, 3]).unwrap();
        snapshot.payload = "[1,2,4]".to_string();
        let err = snapshot.open::<Vec<u32>>("k").unwrap_err();
        assert!(matches!(err, LocusError::MalformedData { .. }));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut snapshot = Snapshot::seal(&1u32).unwrap();
        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(snapshot.open::<u32>("k").is_err());
    }
}
