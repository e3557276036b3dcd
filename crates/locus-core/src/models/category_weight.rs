use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_WEIGHT;

/// Multiplicative preference weight of one place category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub tag: String,
    pub weight: f64,
    /// Times a place carrying this tag was selected.
    #[serde(default)]
    pub selections: u64,
    #[serde(default)]
    pub last_selected: Option<DateTime<Utc>>,
}

impl CategoryWeight {
    /// A never-selected category at the default weight.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            weight: DEFAULT_WEIGHT,
            selections: 0,
            last_selected: None,
        }
    }
}
