use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Clock seam so cache expiry is testable without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// In-memory TTL cache for provider responses.
///
/// Expired entries are dropped lazily on lookup; there is no background
/// eviction task. The decision engines never see this type, only the HTTP
/// clients consult it.
pub struct TtlCache<T, C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<String, (Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<T: Clone, C: Clock> TtlCache<T, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some((inserted_at, value)) if self.clock.now().duration_since(*inserted_at) < self.ttl => {
                Some(value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(key.into(), (self.clock.now(), value));
    }

    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Test clock advanced manually, anchored to a fixed origin.
    #[derive(Clone)]
    struct ManualClock {
        origin: Instant,
        offset_secs: Arc<AtomicU64>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
                offset_secs: Arc::new(AtomicU64::new(0)),
            }
        }

        fn advance_secs(&self, secs: u64) {
            self.offset_secs.fetch_add(secs, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + Duration::from_secs(self.offset_secs.load(Ordering::SeqCst))
        }
    }

    #[test]
    fn fresh_entry_is_returned() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("paris", 12);
        assert_eq!(cache.get("paris"), Some(12));
    }

    #[test]
    fn missing_key_returns_none() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("lyon"), None);
    }

    #[test]
    fn entry_expires_after_ttl() {
        let clock = ManualClock::new();
        let cache = TtlCache::with_clock(Duration::from_secs(3600), clock.clone());
        cache.put("paris", 12);

        clock.advance_secs(3599);
        assert_eq!(cache.get("paris"), Some(12));

        clock.advance_secs(1);
        assert_eq!(cache.get("paris"), None);
    }

    #[test]
    fn put_refreshes_the_entry_age() {
        let clock = ManualClock::new();
        let cache = TtlCache::with_clock(Duration::from_secs(100), clock.clone());
        cache.put("paris", 1);
        clock.advance_secs(90);
        cache.put("paris", 2);
        clock.advance_secs(90);
        assert_eq!(cache.get("paris"), Some(2));
    }

    #[test]
    fn clear_drops_everything() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("a", 1);
        cache.put("b", 2);
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
