//! Minimum-delay gates for outbound provider requests.
//!
//! Third-party APIs tolerate polite, spaced-out traffic. Each provider
//! family shares one gate so its requests never start closer together
//! than the family's minimum interval; families pace independently.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Spacing for the multi-provider resolver family (Last.fm, iTunes, Deezer)
pub const RESOLVER_MIN_DELAY: Duration = Duration::from_millis(900);

/// Spacing for MusicBrainz and the Cover Art Archive, which ask for
/// stricter public-API etiquette (at most ~1 request per second)
pub const MUSICBRAINZ_MIN_DELAY: Duration = Duration::from_millis(1200);

/// Async gate that keeps successive releases at least `min_delay` apart.
///
/// Callers `await` [`wait`](RateGate::wait) before every outbound request.
/// The internal mutex is held across the sleep, so concurrent callers are
/// released one at a time in lock-acquisition order. The gate never fails;
/// it only delays.
pub struct RateGate {
    last_release: Mutex<Option<Instant>>,
    min_delay: Duration,
}

impl RateGate {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            last_release: Mutex::new(None),
            min_delay,
        }
    }

    /// Suspend until `min_delay` has elapsed since the previous release,
    /// then stamp the new release time and return. The first caller
    /// passes through immediately.
    pub async fn wait(&self) {
        let mut last = self.last_release.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_wait_is_immediate() {
        let gate = RateGate::new(Duration::from_millis(500));
        let start = Instant::now();
        gate.wait().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_sequential_waits_are_spaced() {
        let gate = RateGate::new(Duration::from_millis(50));
        let mut stamps = Vec::new();
        for _ in 0..3 {
            gate.wait().await;
            stamps.push(Instant::now());
        }
        for pair in stamps.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(
                gap >= Duration::from_millis(45),
                "gap between releases was {gap:?}"
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_serialize() {
        let gate = Arc::new(RateGate::new(Duration::from_millis(50)));
        let mut handles = Vec::new();
        for _ in 0..3 {
            let gate = gate.clone();
            handles.push(tokio::spawn(async move {
                gate.wait().await;
                Instant::now()
            }));
        }

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();
        for pair in stamps.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(
                gap >= Duration::from_millis(45),
                "gap between releases was {gap:?}"
            );
        }
    }
}
