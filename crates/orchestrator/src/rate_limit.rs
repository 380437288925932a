//! Process-wide request budget.

use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Message returned to callers when the budget denies a request.
///
/// The wording names [`DEFAULT_REQUESTS_PER_HOUR`] and stays fixed even
/// when the budget is built with a different capacity.
pub const RATE_LIMIT_MESSAGE: &str =
    "Rate limit exceeded. You can make up to 100 requests per hour. Please try again later.";

/// Default number of requests allowed per rolling hour.
pub const DEFAULT_REQUESTS_PER_HOUR: u32 = 100;

/// A token bucket shared by all requests in the process.
///
/// The bucket is not keyed by client identity, so heavy use by one caller
/// exhausts it for everyone. Tokens refill continuously in proportion to
/// elapsed time (one token per 36 seconds at the default capacity) rather
/// than resetting in bulk at window boundaries. State lives in memory
/// only and resets on restart.
pub struct RequestBudget {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RequestBudget {
    /// Create a budget allowing `capacity` requests per rolling hour.
    ///
    /// A capacity of zero is clamped to one.
    pub fn per_hour(capacity: u32) -> Self {
        let capacity = NonZeroU32::new(capacity).unwrap_or(NonZeroU32::MIN);
        Self::with_quota(Quota::per_hour(capacity))
    }

    /// Create a budget with an explicit quota.
    pub fn with_quota(quota: Quota) -> Self {
        Self {
            limiter: RateLimiter::direct(quota),
        }
    }

    /// Try to consume one unit of budget.
    ///
    /// Atomic under concurrency: with one token remaining, two
    /// simultaneous calls never both succeed.
    pub fn try_consume(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RequestBudget {
    fn default() -> Self {
        Self::per_hour(DEFAULT_REQUESTS_PER_HOUR)
    }
}
