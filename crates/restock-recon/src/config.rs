//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the reconciliation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Products fetched per catalog page. Bounds memory; not
    /// correctness-relevant.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    100
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size() {
        assert_eq!(ReconciliationConfig::default().page_size, 100);
    }

    #[test]
    fn test_serde_default() {
        let config: ReconciliationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, 100);
    }
}
