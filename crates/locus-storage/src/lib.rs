//! # locus-storage
//!
//! Concrete [`IKeyValueStore`](locus_core::traits::IKeyValueStore) backends
//! and the typed JSON layer the engine persists through.
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`MemoryStore`] | Tests and ephemeral sessions |
//! | [`SqliteStore`] | On-device persistence (single `kv` table, WAL) |

pub mod codec;
pub mod memory;
pub mod snapshot;
pub mod sqlite;

pub use codec::{load_or_default, persist_or_log, read_json, write_json};
pub use memory::MemoryStore;
pub use snapshot::Snapshot;
pub use sqlite::SqliteStore;

use locus_core::errors::{LocusError, StorageError};

/// Convert a storage failure message into a [`LocusError`].
pub fn to_storage_err(message: String) -> LocusError {
    LocusError::StorageError(StorageError::Sqlite { message })
}
