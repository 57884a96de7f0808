//! Async delay for redirects and handoffs.

use std::time::Duration;

/// Resolve after `delay` in the browser; immediately elsewhere.
pub async fn sleep(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
    }
}
