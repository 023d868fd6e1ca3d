use std::time::{Duration, Instant};

/// Time-to-live cache around an expensive producer, for callers that poll
/// on a fixed cadence. Owns a `(value, fetched_at)` pair; the pipeline
/// itself stays stateless and knows nothing about this.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Option<(T, Instant)>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Return the cached value if it is still fresh, otherwise run the
    /// producer. A failed refresh keeps the stale entry in place and
    /// propagates the error; the caller decides whether to fall back.
    pub fn get_or_refresh<E>(
        &mut self,
        produce: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        if let Some((value, fetched_at)) = &self.slot {
            if fetched_at.elapsed() < self.ttl {
                return Ok(value.clone());
            }
        }

        let value = produce()?;
        self.slot = Some((value.clone(), Instant::now()));
        Ok(value)
    }

    /// Drop the cached entry so the next read refreshes unconditionally.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// The stale value, if any — useful for a last-known-good fallback.
    pub fn stale(&self) -> Option<&T> {
        self.slot.as_ref().map(|(value, _)| value)
    }
}
