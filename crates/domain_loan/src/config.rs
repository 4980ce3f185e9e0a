//! Engine configuration

use serde::{Deserialize, Serialize};

/// How the engine treats gaps in its rule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Unmapped products get no rules; unregistered rule codes are skipped
    #[default]
    Permissive,
    /// Unmapped products and unregistered rule codes are errors
    Strict,
}

/// Configuration for the decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strictness: Strictness,
}

impl EngineConfig {
    /// Configuration that fails on unmapped products and unregistered rules
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }
}
