//! Fixed-interval polling as a stream
//!
//! The stream fetches once when first polled and then once per interval
//! tick for as long as it is alive. Dropping it stops polling; there is no
//! other stop condition and no backoff.

use futures::stream::Stream;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Poll `fetch` immediately and then every `interval`
///
/// A slow fetch delays the following tick instead of bursting to catch up.
pub fn poll_stream<F, Fut, T>(interval: Duration, mut fetch: F) -> impl Stream<Item = T> + Send
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send,
    T: Send + 'static,
{
    async_stream::stream! {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            yield fetch().await;
        }
    }
}
