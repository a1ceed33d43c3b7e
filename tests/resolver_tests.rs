#[cfg(test)]
mod tests {
    use larder::engine_config::{EngineConfig, FallbackRecoveryConfig};
    use larder::resolution_cache::ResolutionCache;
    use larder::substitution_model::{ConfidenceTier, SubstitutionCandidate, SubstitutionDataset};
    use larder::substitution_resolver::{
        FallbackError, FallbackFuture, SubstitutionFallback, SubstitutionResolver,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Fallback double that counts calls and returns a fixed script
    struct ScriptedFallback {
        calls: AtomicUsize,
        candidates: Vec<SubstitutionCandidate>,
        delay: Duration,
        fail: bool,
    }

    impl ScriptedFallback {
        fn succeeding(candidates: Vec<SubstitutionCandidate>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                candidates,
                delay: Duration::ZERO,
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                candidates: Vec::new(),
                delay: Duration::ZERO,
                fail: true,
            })
        }

        fn with_delay(mut self: Arc<Self>, delay: Duration) -> Arc<Self> {
            Arc::get_mut(&mut self).expect("unshared").delay = delay;
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SubstitutionFallback for ScriptedFallback {
        fn suggest<'a>(&'a self, _ingredient: &'a str) -> FallbackFuture<'a> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                if self.fail {
                    Err(FallbackError::Provider("scripted failure".to_string()))
                } else {
                    Ok(self.candidates.clone())
                }
            })
        }
    }

    fn candidate(name: &str, score: f64) -> SubstitutionCandidate {
        SubstitutionCandidate::new(name, "1:1", score, ConfidenceTier::for_score(score))
    }

    fn fast_config() -> EngineConfig {
        EngineConfig {
            recovery: FallbackRecoveryConfig {
                max_retries: 0,
                base_retry_delay_ms: 10,
                max_retry_delay_ms: 20,
                call_timeout_secs: 2,
            },
            ..Default::default()
        }
    }

    fn resolver(
        fallback: Arc<dyn SubstitutionFallback>,
        config: EngineConfig,
    ) -> SubstitutionResolver {
        let cache = Arc::new(ResolutionCache::new(config.cache_ttl()));
        resolver_with_cache(fallback, config, cache)
    }

    fn resolver_with_cache(
        fallback: Arc<dyn SubstitutionFallback>,
        config: EngineConfig,
        cache: Arc<ResolutionCache>,
    ) -> SubstitutionResolver {
        SubstitutionResolver::new(
            Arc::new(SubstitutionDataset::load().unwrap()),
            cache,
            fallback,
            config,
        )
    }

    #[tokio::test]
    async fn test_butter_resolves_deterministically_from_static_tier() {
        let fallback = ScriptedFallback::succeeding(vec![candidate("never used", 0.9)]);
        let resolver = resolver(fallback.clone(), fast_config());

        let first = resolver.resolve("butter", 3).await;
        assert!(!first.is_empty());
        assert_eq!(first[0].substitute, "coconut oil");
        assert_eq!(first[0].confidence_tier, ConfidenceTier::High);

        for _ in 0..5 {
            assert_eq!(resolver.resolve("butter", 3).await, first);
        }
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn test_alias_and_qualified_queries_hit_static_tier() {
        let fallback = ScriptedFallback::succeeding(Vec::new());
        let resolver = resolver(fallback.clone(), fast_config());

        assert!(!resolver.resolve("green onions", 3).await.is_empty());
        assert!(!resolver.resolve("Fresh Basil", 3).await.is_empty());
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn test_results_ranked_descending_and_truncated() {
        let fallback = ScriptedFallback::succeeding(Vec::new());
        let resolver = resolver(fallback, fast_config());

        let results = resolver.resolve("butter", 2).await;
        assert_eq!(results.len(), 2);
        assert!(results[0].confidence_score >= results[1].confidence_score);
    }

    #[tokio::test]
    async fn test_unknown_ingredient_uses_fallback_then_cache() {
        let fallback = ScriptedFallback::succeeding(vec![
            candidate("celeriac", 0.7),
            candidate("parsnip", 0.82),
        ]);
        let resolver = resolver(fallback.clone(), fast_config());

        let first = resolver.resolve("salsify", 5).await;
        assert_eq!(fallback.call_count(), 1);
        // Fallback results are ranked before caching
        assert_eq!(first[0].substitute, "parsnip");

        let second = resolver.resolve("salsify", 5).await;
        assert_eq!(second, first);
        assert_eq!(fallback.call_count(), 1, "cache tier must answer repeats");
    }

    #[tokio::test]
    async fn test_expired_cache_entry_triggers_fallback_again() {
        let fallback = ScriptedFallback::succeeding(vec![candidate("parsnip", 0.82)]);
        let config = fast_config();
        // A tiny TTL so the second resolve sees an expired entry
        let cache = Arc::new(ResolutionCache::new(Duration::from_millis(30)));
        let resolver = resolver_with_cache(fallback.clone(), config, cache);

        resolver.resolve("salsify", 3).await;
        assert_eq!(fallback.call_count(), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;

        resolver.resolve("salsify", 3).await;
        assert_eq!(fallback.call_count(), 2, "expiry must re-run the fallback");
    }

    #[tokio::test]
    async fn test_fallback_failure_is_an_empty_list_not_an_error() {
        let fallback = ScriptedFallback::failing();
        let resolver = resolver(fallback, fast_config());

        let results = resolver.resolve("salsify", 3).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_single_flight_for_concurrent_misses() {
        let fallback = ScriptedFallback::succeeding(vec![candidate("turmeric", 0.65)])
            .with_delay(Duration::from_millis(80));
        let resolver = Arc::new(resolver(fallback.clone(), fast_config()));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move { resolver.resolve("saffron", 3).await })
            })
            .collect();

        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap());
        }

        assert_eq!(
            fallback.call_count(),
            1,
            "concurrent misses must share one outbound call"
        );
        for result in &results {
            assert_eq!(result, &results[0]);
        }
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_empty() {
        let fallback = ScriptedFallback::succeeding(vec![candidate("x", 0.9)])
            .with_delay(Duration::from_secs(5));
        let config = EngineConfig {
            recovery: FallbackRecoveryConfig {
                max_retries: 0,
                base_retry_delay_ms: 10,
                max_retry_delay_ms: 20,
                call_timeout_secs: 1,
            },
            ..Default::default()
        };
        let resolver = resolver(fallback, config);

        let results = resolver.resolve("salsify", 3).await;
        assert!(results.is_empty());
    }
}
