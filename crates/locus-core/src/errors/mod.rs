mod locus_error;
mod remote_error;
mod storage_error;

pub use locus_error::{LocusError, LocusResult};
pub use remote_error::RemoteError;
pub use storage_error::StorageError;
