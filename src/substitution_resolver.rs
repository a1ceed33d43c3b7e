//! # Substitution Resolver Module
//!
//! Resolves an ingredient name into ranked, confidence-scored substitute
//! candidates through three tiers, stopping at the first that answers:
//!
//! 1. **Static tier**: exact/alias lookup in the curated dataset, then a
//!    fuzzy scan accepted at the configured similarity threshold
//! 2. **Cache tier**: a non-expired entry in the resolution cache
//! 3. **Fallback tier**: the injected AI collaborator, single-flighted
//!    per normalized key, with bounded timeout and jittered retries
//!
//! Substitution is an enhancement, not a required path: every fallback
//! failure mode (timeout, provider error, malformed response) degrades
//! to an empty candidate list instead of propagating an error.

use dashmap::DashMap;
use log::{debug, info, warn};
use rand::Rng;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::engine_config::{EngineConfig, FallbackRecoveryConfig};
use crate::normalize::normalize;
use crate::resolution_cache::ResolutionCache;
use crate::substitution_model::{SubstitutionCandidate, SubstitutionDataset};

/// Errors from the AI-fallback collaborator.
///
/// These never reach resolver callers; they are logged and recovered to
/// an empty candidate list.
#[derive(Debug, Clone)]
pub enum FallbackError {
    /// The call exceeded its bounded timeout
    Timeout(String),
    /// The provider reported a failure
    Provider(String),
    /// The provider answered with something that does not decode into
    /// valid candidates
    MalformedResponse(String),
}

impl std::fmt::Display for FallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackError::Timeout(msg) => write!(f, "Fallback timeout: {msg}"),
            FallbackError::Provider(msg) => write!(f, "Provider error: {msg}"),
            FallbackError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FallbackError {}

impl From<anyhow::Error> for FallbackError {
    fn from(err: anyhow::Error) -> Self {
        FallbackError::Provider(err.to_string())
    }
}

/// Future type returned by [`SubstitutionFallback::suggest`]
pub type FallbackFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<SubstitutionCandidate>, FallbackError>> + Send + 'a>>;

/// The injected AI-fallback collaborator.
///
/// The engine hands it a normalized ingredient name and expects a
/// candidate list back; the wire protocol behind it belongs to the host
/// integration.
pub trait SubstitutionFallback: Send + Sync {
    fn suggest<'a>(&'a self, ingredient: &'a str) -> FallbackFuture<'a>;
}

/// Decode a fallback provider payload into candidates.
///
/// Host integrations use this at their wire boundary so a garbled AI
/// response becomes a typed [`FallbackError::MalformedResponse`] instead
/// of a swallowed exception. Candidates whose tier disagrees with their
/// score are rejected here for the same reason the curated dataset
/// rejects them at load.
pub fn parse_fallback_payload(json: &str) -> Result<Vec<SubstitutionCandidate>, FallbackError> {
    let candidates: Vec<SubstitutionCandidate> = serde_json::from_str(json)
        .map_err(|e| FallbackError::MalformedResponse(e.to_string()))?;
    for candidate in &candidates {
        if !candidate.tier_is_consistent() {
            return Err(FallbackError::MalformedResponse(format!(
                "candidate '{}' has score {} but tier {}",
                candidate.substitute,
                candidate.confidence_score,
                candidate.confidence_tier.display_name()
            )));
        }
    }
    Ok(candidates)
}

/// Three-tier substitution resolver.
///
/// The dataset is read-only, the cache is concurrency-safe, and the
/// in-flight table guarantees at most one outstanding fallback call per
/// normalized key; the resolver itself can be shared freely across
/// request tasks.
pub struct SubstitutionResolver {
    dataset: Arc<SubstitutionDataset>,
    cache: Arc<ResolutionCache>,
    fallback: Arc<dyn SubstitutionFallback>,
    config: EngineConfig,
    /// Per-key single-flight gates for tier 3
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

impl SubstitutionResolver {
    pub fn new(
        dataset: Arc<SubstitutionDataset>,
        cache: Arc<ResolutionCache>,
        fallback: Arc<dyn SubstitutionFallback>,
        config: EngineConfig,
    ) -> Self {
        Self {
            dataset,
            cache,
            fallback,
            config,
            in_flight: DashMap::new(),
        }
    }

    /// Resolve an ingredient into at most `max_results` candidates,
    /// ranked descending by confidence score.
    ///
    /// Tier checks are strictly sequential: the cache is never consulted
    /// when the curated dataset answers, and the fallback is never
    /// invoked when the cache holds a fresh entry.
    pub async fn resolve(
        &self,
        ingredient: &str,
        max_results: usize,
    ) -> Vec<SubstitutionCandidate> {
        let key = normalize(ingredient);
        if key.is_empty() {
            return Vec::new();
        }

        // Tier 1: curated dataset, exact/alias then fuzzy
        let static_hit = self.dataset.lookup_exact(&key).or_else(|| {
            self.dataset
                .lookup_fuzzy(&key, self.config.similarity_threshold)
        });
        if let Some(entry) = static_hit {
            debug!("static tier answered '{}' via '{}'", key, entry.ingredient);
            let mut candidates = entry.candidates.clone();
            candidates.truncate(max_results);
            return candidates;
        }

        // Tier 2: resolution cache
        if let Some(mut candidates) = self.cache.get_fresh(&key) {
            debug!("cache tier answered '{}'", key);
            candidates.truncate(max_results);
            return candidates;
        }

        // Tier 3: single-flighted fallback
        let mut candidates = self.resolve_via_fallback(key).await;
        candidates.truncate(max_results);
        candidates
    }

    /// Invoke the fallback for a key that missed tiers 1 and 2,
    /// collapsing concurrent callers onto one outbound call.
    async fn resolve_via_fallback(&self, key: String) -> Vec<SubstitutionCandidate> {
        let gate = self
            .in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = gate.lock().await;

        // A waiter that queued behind the winning caller finds the cache
        // already populated and never issues its own call
        if let Some(candidates) = self.cache.get_fresh(&key) {
            debug!("shared in-flight fallback result for '{}'", key);
            return candidates;
        }

        let result = self.spawn_fallback_call(key.clone()).await;
        self.in_flight.remove(&key);
        result
    }

    /// Run the fallback call on a detached task so an abandoned caller
    /// cannot cancel the work mid-flight; later waiters still get the
    /// cached result.
    async fn spawn_fallback_call(&self, key: String) -> Vec<SubstitutionCandidate> {
        let fallback = Arc::clone(&self.fallback);
        let cache = Arc::clone(&self.cache);
        let recovery = self.config.recovery.clone();

        let handle = tokio::spawn(async move {
            match call_with_recovery(fallback.as_ref(), &key, &recovery).await {
                Ok(mut candidates) => {
                    candidates.sort_by(|a, b| {
                        b.confidence_score
                            .partial_cmp(&a.confidence_score)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                    info!(
                        "fallback produced {} candidates for '{}'",
                        candidates.len(),
                        key
                    );
                    cache.store(&key, candidates.clone());
                    candidates
                }
                Err(err) => {
                    warn!("fallback failed for '{}': {}", key, err);
                    Vec::new()
                }
            }
        });

        match handle.await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("fallback task aborted: {}", err);
                Vec::new()
            }
        }
    }
}

/// Call the fallback with a bounded timeout, retrying with exponential
/// backoff plus random jitter. Every exit path is a `Result`; the caller
/// decides that failures mean an empty list.
async fn call_with_recovery(
    fallback: &dyn SubstitutionFallback,
    key: &str,
    recovery: &FallbackRecoveryConfig,
) -> Result<Vec<SubstitutionCandidate>, FallbackError> {
    let timeout = Duration::from_secs(recovery.call_timeout_secs);
    let mut attempt: u32 = 0;

    loop {
        let outcome = tokio::time::timeout(timeout, fallback.suggest(key)).await;
        let err = match outcome {
            Ok(Ok(candidates)) => return Ok(candidates),
            Ok(Err(err)) => err,
            Err(_) => FallbackError::Timeout(format!(
                "no response for '{key}' within {}s",
                recovery.call_timeout_secs
            )),
        };

        if attempt >= recovery.max_retries {
            return Err(err);
        }
        attempt += 1;

        let delay = retry_delay(recovery, attempt);
        debug!(
            "fallback attempt {} for '{}' failed ({}), retrying in {:?}",
            attempt, key, err, delay
        );
        tokio::time::sleep(delay).await;
    }
}

/// Exponential backoff capped at the configured maximum, with random
/// jitter of up to half the base delay
fn retry_delay(recovery: &FallbackRecoveryConfig, attempt: u32) -> Duration {
    let exponential = recovery
        .base_retry_delay_ms
        .saturating_mul(1u64 << (attempt - 1).min(16));
    let capped = exponential.min(recovery.max_retry_delay_ms);
    let jitter = rand::thread_rng().gen_range(0..=recovery.base_retry_delay_ms / 2);
    Duration::from_millis(capped + jitter)
}
