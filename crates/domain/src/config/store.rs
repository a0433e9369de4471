use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Upper bound for one find-or-create-update sequence before the caller
    /// gets a transient error.
    #[serde(default = "default_operation_timeout_ms")]
    pub operation_timeout_ms: u64,

    /// How many times a conditional update is retried after losing a race
    /// against another writer of the same domain.
    #[serde(default = "default_max_update_attempts")]
    pub max_update_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            operation_timeout_ms: default_operation_timeout_ms(),
            max_update_attempts: default_max_update_attempts(),
        }
    }
}

fn default_operation_timeout_ms() -> u64 {
    10_000
}

fn default_max_update_attempts() -> u32 {
    32
}
