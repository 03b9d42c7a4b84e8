//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for paginated listings.
const fn default_page_size() -> u32 {
    20
}

/// Default toast display window in milliseconds.
const fn default_toast_duration_ms() -> u64 {
    4000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size for `ingredient page` and other paginated listings.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// How long a notification stays visible before it is dismissed.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}
