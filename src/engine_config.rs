//! # Engine Configuration Module
//!
//! This module defines configuration structures for the resolution engine,
//! including matching thresholds, cache lifetime, and fallback recovery
//! settings.
//!
//! The matching threshold and cache TTL started as hand-tuned constants and
//! are kept adjustable here rather than hard-coded at call sites.

// Constants for engine configuration
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60; // 24 hours
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Recovery configuration for the AI-fallback boundary
#[derive(Debug, Clone)]
pub struct FallbackRecoveryConfig {
    /// Maximum number of retry attempts after the first call
    pub max_retries: u32,
    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,
    /// Maximum delay between retries in milliseconds
    pub max_retry_delay_ms: u64,
    /// Timeout for a single fallback call in seconds
    pub call_timeout_secs: u64,
}

impl Default for FallbackRecoveryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_retry_delay_ms: 500,   // 0.5 seconds
            max_retry_delay_ms: 5000,   // 5 seconds
            call_timeout_secs: 20,      // 20 seconds
        }
    }
}

/// Configuration structure for the resolution engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum similarity score for two ingredient names to be treated
    /// as the same identity (fuzzy dataset lookup and list consolidation)
    pub similarity_threshold: f64,
    /// Lifetime of AI-fallback results in the resolution cache, in seconds
    pub cache_ttl_secs: u64,
    /// Default number of substitution candidates returned per query
    pub max_results: usize,
    /// Recovery and timeout configuration for the fallback collaborator
    pub recovery: FallbackRecoveryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_results: DEFAULT_MAX_RESULTS,
            recovery: FallbackRecoveryConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Cache TTL as a `std::time::Duration`
    pub fn cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.similarity_threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(config.cache_ttl_secs, 24 * 60 * 60);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_recovery_defaults_are_bounded() {
        let recovery = FallbackRecoveryConfig::default();
        assert!(recovery.max_retries <= 10); // Reasonable retry limit
        assert!(recovery.base_retry_delay_ms >= 100);
        assert!(recovery.base_retry_delay_ms <= recovery.max_retry_delay_ms);
        assert!(recovery.call_timeout_secs > 0);
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = EngineConfig {
            cache_ttl_secs: 90,
            ..Default::default()
        };
        assert_eq!(config.cache_ttl(), std::time::Duration::from_secs(90));
    }
}
