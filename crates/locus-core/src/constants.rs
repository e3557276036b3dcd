/// Version of the persisted snapshot envelope.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Store key suffixes, appended to the configured key prefix.
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const HISTORY: &str = "history";
    pub const USAGE: &str = "usage";
    pub const WEIGHTS: &str = "weights";
    pub const PREDICTION_CACHE: &str = "cache:predictions";
    pub const DETAIL_CACHE: &str = "cache:details";
    /// Common prefix of every cache namespace key.
    pub const CACHE_PREFIX: &str = "cache:";
}

/// Prefix of synthetic place ids given to pure-text history terms.
pub const SYNTHETIC_ID_PREFIX: &str = "history:";

/// Milliseconds in a day.
pub const MS_PER_DAY: f64 = 86_400_000.0;
