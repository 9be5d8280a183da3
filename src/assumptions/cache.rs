//! Process-lifetime cache in front of a career data source
//!
//! Entries are keyed by `(career text, state, city)` and never evicted. Career
//! parameters are static inputs for the life of a process, so a stale entry is
//! never a correctness problem. Provider failures resolve to the fallback
//! profile and are not cached, so a later successful lookup can fill the entry.

use super::career::{CareerProfile, CareerProfileProvider};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Note attached to the fallback profile
const ESTIMATED_NOTE: &str =
    "Career data was unavailable; projections use estimated salary data.";

/// Normalized cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CareerKey {
    pub career_text: String,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl CareerKey {
    pub fn new(career_text: &str, state: Option<&str>, city: Option<&str>) -> Self {
        fn clean(value: Option<&str>) -> Option<String> {
            value
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
        }

        Self {
            career_text: career_text.trim().to_lowercase(),
            state: clean(state),
            city: clean(city),
        }
    }
}

/// Read-mostly cache shared by every simulation in a process
pub struct CareerProfileCache {
    provider: Box<dyn CareerProfileProvider>,

    entries: RwLock<HashMap<CareerKey, CareerProfile>>,

    /// Statistics
    hits: AtomicU64,
    misses: AtomicU64,
    fallbacks: AtomicU64,
}

impl CareerProfileCache {
    pub fn new(provider: Box<dyn CareerProfileProvider>) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
        }
    }

    /// Resolve a career. Never fails: provider errors yield the fallback profile.
    pub fn resolve(&self, career_text: &str, state: Option<&str>, city: Option<&str>) -> CareerProfile {
        let key = CareerKey::new(career_text, state, city);

        {
            let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(profile) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("career cache hit for {:?}", key);
                return profile.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("career cache miss for {:?}", key);

        match self.provider.resolve(career_text, state, city) {
            Ok(profile) => {
                let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
                // A concurrent lookup may have filled the entry first; keep the first value
                entries.entry(key).or_insert(profile).clone()
            }
            Err(err) => {
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                warn!("career lookup failed for {:?}: {}; using estimated profile", career_text, err);
                CareerProfile::fallback(ESTIMATED_NOTE)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of lookups answered with the fallback profile
    pub fn fallbacks(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Get cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

impl std::fmt::Debug for CareerProfileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerProfileCache")
            .field("entries", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .field("fallbacks", &self.fallbacks())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::StaticCareerTable;
    use crate::error::ProviderError;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    /// Counts calls and returns a fixed profile
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    impl CareerProfileProvider for CountingProvider {
        fn resolve(&self, _text: &str, _state: Option<&str>, _city: Option<&str>) -> Result<CareerProfile, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut profile = CareerProfile::fallback("stub");
            profile.estimated = false;
            profile.title = "Stub".to_string();
            Ok(profile)
        }
    }

    struct FailingProvider;

    impl CareerProfileProvider for FailingProvider {
        fn resolve(&self, _text: &str, _state: Option<&str>, _city: Option<&str>) -> Result<CareerProfile, ProviderError> {
            Err(ProviderError::Timeout { millis: 5_000 })
        }
    }

    #[test]
    fn test_cache_hits_and_misses() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CareerProfileCache::new(Box::new(CountingProvider { calls: calls.clone() }));

        let first = cache.resolve("Software Engineer", Some("CA"), None);
        let second = cache.resolve("  software engineer ", Some("ca"), None);
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);

        // Different location is a different key
        cache.resolve("software engineer", Some("TX"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
        assert!((cache.hit_rate() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_failure_returns_fallback_and_is_not_cached() {
        let cache = CareerProfileCache::new(Box::new(FailingProvider));

        let profile = cache.resolve("astronaut", None, None);
        assert!(profile.estimated);
        assert_eq!(profile.median_salary, 55_000.0);
        assert_eq!(profile.low_salary, 40_000.0);
        assert_eq!(profile.high_salary, 75_000.0);
        assert_eq!(profile.growth_rate, 0.04);
        assert_eq!(profile.grad_school_years, 0);
        assert_eq!(profile.note.as_deref(), Some(ESTIMATED_NOTE));

        assert!(cache.is_empty());
        assert_eq!(cache.fallbacks(), 1);
    }

    #[test]
    fn test_concurrent_lookups_share_entries() {
        use rayon::prelude::*;

        let cache = CareerProfileCache::new(Box::new(StaticCareerTable::default_table()));
        let titles: Vec<String> = (0..64)
            .into_par_iter()
            .map(|i| {
                let text = if i % 2 == 0 { "nurse" } else { "teacher" };
                cache.resolve(text, Some("OH"), None).title
            })
            .collect();

        assert_eq!(titles.iter().filter(|t| *t == "Registered Nurse").count(), 32);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits() + cache.misses(), 64);
    }
}
