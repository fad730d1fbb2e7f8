//! Simulated call latency.
//!
//! Every service call suspends for a configured duration before touching
//! the store, standing in for a network round-trip. Each operation class
//! has its own delay, tuned to feel like a real backend. Tests run with
//! [`Latency::none`].

use std::time::Duration;

/// Per-operation-class simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Register, login, password reset.
    pub auth: Duration,
    /// Simulated verification email.
    pub email: Duration,
    /// Read-only catalog queries.
    pub browse: Duration,
    /// Shop upsert and order creation.
    pub mutate: Duration,
    /// Order listing and status changes.
    pub orders: Duration,
}

impl Latency {
    /// The demo-realistic delays.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            auth: Duration::from_millis(800),
            email: Duration::from_millis(1000),
            browse: Duration::from_millis(300),
            mutate: Duration::from_millis(600),
            orders: Duration::from_millis(400),
        }
    }

    /// No delays. For tests and scripting.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            email: Duration::ZERO,
            browse: Duration::ZERO,
            mutate: Duration::ZERO,
            orders: Duration::ZERO,
        }
    }

    /// Suspend the caller for `d`, skipping the timer entirely when zero.
    pub(crate) async fn pause(d: Duration) {
        if !d.is_zero() {
            tokio::time::sleep(d).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_none_does_not_sleep() {
        let start = std::time::Instant::now();
        Latency::pause(Latency::none().auth).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_simulated_matches_demo_delays() {
        let latency = Latency::simulated();
        assert_eq!(latency.auth, Duration::from_millis(800));
        assert_eq!(latency.browse, Duration::from_millis(300));
    }
}
