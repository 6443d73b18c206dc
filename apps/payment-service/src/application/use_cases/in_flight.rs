//! Per-entity exclusion for mutating requests.
//!
//! A request that reads, calls the gateway and writes back must not
//! interleave with another request on the same entity. Instead of queueing,
//! the second request is refused and the caller may retry.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Set of entity IDs currently being modified.
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id`. Returns `None` if another request holds it.
    #[must_use]
    pub fn try_claim(&self, id: &str) -> Option<InFlightGuard> {
        if self.active.lock().insert(id.to_string()) {
            Some(InFlightGuard {
                active: Arc::clone(&self.active),
                id: id.to_string(),
            })
        } else {
            None
        }
    }
}

/// Releases the claim on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    active: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.active.lock().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let in_flight = InFlight::new();
        let guard = in_flight.try_claim("pay_1");
        assert!(guard.is_some());
        assert!(in_flight.try_claim("pay_1").is_none());
        assert!(in_flight.try_claim("pay_2").is_some());

        drop(guard);
        assert!(in_flight.try_claim("pay_1").is_some());
    }
}
