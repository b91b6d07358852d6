//! Token-bucket rate limiter for upstream API hosts.
//!
//! One `RateLimiter` guards one upstream host and is shared across every
//! client for that host via `Arc`. The bucket starts full; a background
//! task returns one token every `window / capacity`, capped at capacity.
//! Waiters are served in FIFO order and can wait indefinitely.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

pub struct RateLimiter {
    tokens: Arc<Semaphore>,
    capacity: usize,
    refill_interval: Duration,
    refill_task: JoinHandle<()>,
}

impl RateLimiter {
    /// Create a limiter allowing `capacity` requests per `window`.
    ///
    /// Must be called from within a tokio runtime; the refill task is
    /// spawned immediately and aborted when the limiter is dropped.
    pub fn new(capacity: usize, window: Duration) -> Self {
        assert!(capacity > 0, "rate limiter capacity must be positive");

        let tokens = Arc::new(Semaphore::new(capacity));
        let refill_interval = window / capacity as u32;

        let refill_tokens = Arc::clone(&tokens);
        let refill_task = tokio::spawn(async move {
            let mut tick = tokio::time::interval(refill_interval);
            // The first tick fires immediately; skip it so the bucket
            // does not briefly exceed its window budget.
            tick.tick().await;
            loop {
                tick.tick().await;
                if refill_tokens.available_permits() < capacity {
                    refill_tokens.add_permits(1);
                }
            }
        });

        Self {
            tokens,
            capacity,
            refill_interval,
            refill_task,
        }
    }

    /// Wait until one token is available, then consume it.
    ///
    /// Tokens are granted in request order. Dropping the returned future
    /// while queued releases the queue slot without consuming a token.
    pub async fn acquire(&self) {
        // The semaphore is never closed, so acquire cannot fail.
        let permit = self
            .tokens
            .acquire()
            .await
            .expect("rate limiter semaphore closed");
        permit.forget();
    }

    /// Maximum number of tokens the bucket holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Interval at which one token is returned to the bucket.
    pub fn refill_interval(&self) -> Duration {
        self.refill_interval
    }
}

impl Drop for RateLimiter {
    fn drop(&mut self) {
        self.refill_task.abort();
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("capacity", &self.capacity)
            .field("refill_interval", &self.refill_interval)
            .field("available", &self.tokens.available_permits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn burst_up_to_capacity_is_immediate() {
        let limiter = RateLimiter::new(3, Duration::from_millis(300));

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;

        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn drained_bucket_waits_for_refill() {
        let limiter = RateLimiter::new(2, Duration::from_millis(200));

        limiter.acquire().await;
        limiter.acquire().await;

        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();

        // refill interval is 100ms; allow scheduler slack on both sides
        assert!(elapsed >= Duration::from_millis(80), "waited {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(250), "waited {:?}", elapsed);
    }

    #[tokio::test]
    async fn window_budget_is_bounded() {
        let limiter = Arc::new(RateLimiter::new(4, Duration::from_millis(400)));

        // Drain the initial burst.
        for _ in 0..4 {
            limiter.acquire().await;
        }

        // Count how many tokens arrive in roughly one window.
        let start = Instant::now();
        let mut issued = 0usize;
        while start.elapsed() < Duration::from_millis(390) {
            tokio::select! {
                _ = limiter.acquire() => issued += 1,
                _ = tokio::time::sleep(Duration::from_millis(400).saturating_sub(start.elapsed())) => break,
            }
        }

        assert!(issued <= 4, "issued {} tokens in one window", issued);
    }

    #[tokio::test]
    async fn waiters_are_served_in_fifo_order() {
        let limiter = Arc::new(RateLimiter::new(1, Duration::from_millis(100)));
        limiter.acquire().await;

        let order = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let mut handles = Vec::new();
        for i in 0..3 {
            let limiter = Arc::clone(&limiter);
            let order = Arc::clone(&order);
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                order.lock().await.push(i);
            }));
            // Give each waiter time to enqueue before the next.
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(*order.lock().await, vec![0, 1, 2]);
    }
}
