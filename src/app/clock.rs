use crate::app::action::Action;
use crate::preview::page::ClockTick;
use chrono::{Local, Timelike};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sends the current time right away, then again at every minute boundary.
/// Aborting the handle unregisters the ticker.
pub fn spawn_ticker(tx: mpsc::Sender<Action>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Local::now();
            if tx
                .send(Action::ClockTicked(ClockTick::from_time(&now)))
                .await
                .is_err()
            {
                break;
            }
            tokio::time::sleep(until_next_minute(now.second(), now.nanosecond())).await;
        }
    })
}

fn until_next_minute(second: u32, nanosecond: u32) -> Duration {
    // Leap seconds report nanosecond >= 1e9
    let elapsed = Duration::from_secs(u64::from(second.min(59)))
        + Duration::from_nanos(u64::from(nanosecond.min(999_999_999)));
    Duration::from_secs(60).saturating_sub(elapsed).max(Duration::from_millis(1))
}

/// Owns the ticker registration so start and stop stay paired.
#[derive(Default)]
pub struct Clock {
    ticker: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start(&mut self, tx: mpsc::Sender<Action>) {
        if self.ticker.is_none() {
            self.ticker = Some(spawn_ticker(tx));
        }
    }

    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_next_minute() {
        assert_eq!(until_next_minute(0, 0), Duration::from_secs(60));
        assert_eq!(until_next_minute(59, 500_000_000), Duration::from_millis(500));
        assert!(until_next_minute(59, 1_500_000_000) >= Duration::from_millis(1));
    }

    #[tokio::test]
    async fn test_ticker_fires_immediately_and_stops() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut clock = Clock::default();
        clock.start(tx.clone());
        clock.start(tx);
        assert!(clock.is_running());
        assert!(matches!(rx.recv().await, Some(Action::ClockTicked(_))));

        clock.stop();
        assert!(!clock.is_running());
        // The aborted task drops its sender
        assert!(rx.recv().await.is_none());
    }
}
