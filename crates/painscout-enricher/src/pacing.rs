//! Pacing policies for live classification calls.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Gate awaited before each live call.
#[async_trait]
pub trait Pacer: Send {
    /// Resolve once the next call may proceed.
    async fn ready(&mut self);
}

/// Enforces a minimum spacing between successive calls. The first call is
/// never delayed.
#[derive(Debug)]
pub struct FixedIntervalPacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedIntervalPacer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }
}

impl Default for FixedIntervalPacer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Pacer for FixedIntervalPacer {
    async fn ready(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        self.last = Some(Instant::now());
    }
}

/// No pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

#[async_trait]
impl Pacer for Unpaced {
    async fn ready(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_call_is_immediate() {
        let mut pacer = FixedIntervalPacer::new(Duration::from_secs(60));
        let start = Instant::now();
        pacer.ready().await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn successive_calls_are_spaced() {
        let interval = Duration::from_millis(40);
        let mut pacer = FixedIntervalPacer::new(interval);
        let start = Instant::now();
        pacer.ready().await;
        pacer.ready().await;
        pacer.ready().await;
        assert!(start.elapsed() >= interval * 2);
    }

    #[tokio::test]
    async fn unpaced_never_waits() {
        let mut pacer = Unpaced;
        let start = Instant::now();
        for _ in 0..100 {
            pacer.ready().await;
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
