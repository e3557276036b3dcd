// Single source of truth for all default values.

// --- Cache ---
pub const DEFAULT_PREDICTION_TTL_SECS: u64 = 30 * 60; // 30 minutes
pub const DEFAULT_DETAIL_TTL_SECS: u64 = 7 * 24 * 3600; // 7 days
pub const DEFAULT_MAX_CACHE_ENTRIES: usize = 100;
pub const DEFAULT_CACHE_SWEEP_INTERVAL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_EVICTION_ACCESS_WEIGHT: f64 = 0.7;
pub const DEFAULT_EVICTION_IDLE_WEIGHT: f64 = 0.3;

// --- Usage tracker ---
pub const DEFAULT_DAYS_FACTOR: f64 = 7.0;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.7;
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.3;
pub const DEFAULT_MAX_PREDICTIONS: usize = 5;

// --- Preferences ---
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_WEIGHT_INCREMENT: f64 = 0.1;
pub const DEFAULT_WEIGHT_DECAY: f64 = 0.99;
pub const DEFAULT_MIN_WEIGHT: f64 = 0.5;
pub const DEFAULT_MAX_WEIGHT: f64 = 2.0;
pub const DEFAULT_PURGE_WINDOW_DAYS: u64 = 7;
pub const DEFAULT_SEED_CATEGORIES: &[&str] = &[
    "restaurant",
    "cafe",
    "lodging",
    "locality",
    "point_of_interest",
    "establishment",
    "transit_station",
    "shopping_mall",
];

// --- Suggestions ---
pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_MAX_HISTORY: usize = 50;
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_RADIUS_M: u32 = 50_000;

// --- Storage ---
pub const DEFAULT_KEY_PREFIX: &str = "locus:";
pub const DEFAULT_DB_FILENAME: &str = "locus.db";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
