//! # Queue Feed
//!
//! Stand-in for a real-time backend feed of cafeteria queue lengths. A single
//! tokio task emits a [`QueueSnapshot`] immediately on start and then one per
//! tick, perturbing every tracked cafeteria's count by a bounded delta.
//! Snapshots fan out on a `tokio::sync::broadcast` channel so any number of
//! observers can follow the feed; stopping the feed closes the channel.

use chrono::{DateTime, Local};
use log::{debug, info};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::feed::rng::SplitMix64;

/// Counts are clamped to `[0, QUEUE_MAX]`.
pub const QUEUE_MAX: u8 = 25;

/// Default emission period.
pub const DEFAULT_TICK: Duration = Duration::from_secs(3);

/// Snapshots buffered per receiver before a slow subscriber starts lagging.
const CHANNEL_CAPACITY: usize = 16;

/// One cafeteria's current waiting count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeteriaQueue {
    pub name: String,
    pub waiting: u8,
}

impl CafeteriaQueue {
    pub fn new(name: impl Into<String>, waiting: u8) -> Self {
        Self {
            name: name.into(),
            waiting: waiting.min(QUEUE_MAX),
        }
    }
}

/// All tracked queues at one instant, emitted atomically.
#[derive(Debug, Clone)]
pub struct QueueSnapshot {
    pub taken_at: DateTime<Local>,
    pub queues: Vec<CafeteriaQueue>,
}

/// Handle to the running feed task.
///
/// `start` hands back the first receiver together with the handle so the
/// initial snapshot cannot be missed; further observers attach through
/// [`QueueFeed::subscribe`]. After [`QueueFeed::stop`] the channel is closed:
/// existing receivers observe closure once they drain, and late subscribers
/// get nothing.
pub struct QueueFeed {
    tx: Option<broadcast::Sender<QueueSnapshot>>,
    worker: Option<JoinHandle<()>>,
}

impl QueueFeed {
    /// Spawn the feed task. Must be called within a tokio runtime.
    pub fn start(
        cafeterias: Vec<CafeteriaQueue>,
        period: Duration,
        seed: u64,
    ) -> (Self, broadcast::Receiver<QueueSnapshot>) {
        let (tx, rx) = broadcast::channel(CHANNEL_CAPACITY);
        let worker_tx = tx.clone();

        let worker = tokio::spawn(async move {
            let mut rng = SplitMix64::new(seed);
            let mut queues = cafeterias;
            let mut ticker = tokio::time::interval(period);

            loop {
                // First tick completes immediately, giving the initial snapshot.
                ticker.tick().await;
                let snapshot = QueueSnapshot {
                    taken_at: Local::now(),
                    queues: queues.clone(),
                };
                if worker_tx.send(snapshot).is_err() {
                    debug!("Queue snapshot dropped: no active subscribers");
                }
                step(&mut queues, &mut rng);
            }
        });

        info!("Queue feed started (period {:?}, seed {})", period, seed);
        (
            Self {
                tx: Some(tx),
                worker: Some(worker),
            },
            rx,
        )
    }

    /// Attach another observer. Returns `None` once the feed is stopped.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<QueueSnapshot>> {
        self.tx.as_ref().map(|tx| tx.subscribe())
    }

    /// Cancel the timer task and close the channel. Stopping an already
    /// stopped feed is a no-op.
    pub fn stop(&mut self) {
        let Some(tx) = self.tx.take() else {
            debug!("Queue feed stop: already stopped");
            return;
        };
        drop(tx);
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
        info!("Queue feed stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.tx.is_none()
    }
}

impl Drop for QueueFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Perturb every queue by a delta in `[-3, 3]`, clamped to `[0, QUEUE_MAX]`.
fn step(queues: &mut [CafeteriaQueue], rng: &mut SplitMix64) {
    for queue in queues.iter_mut() {
        let next = i16::from(queue.waiting) + i16::from(rng.delta());
        queue.waiting = next.clamp(0, i16::from(QUEUE_MAX)) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<CafeteriaQueue> {
        vec![
            CafeteriaQueue::new("North Commons", 6),
            CafeteriaQueue::new("Union Food Court", 12),
        ]
    }

    #[test]
    fn test_counts_stay_in_range_over_many_steps() {
        let mut queues = vec![
            CafeteriaQueue::new("Low", 0),
            CafeteriaQueue::new("High", QUEUE_MAX),
            CafeteriaQueue::new("Mid", 13),
        ];
        let mut rng = SplitMix64::new(99);
        for _ in 0..10_000 {
            step(&mut queues, &mut rng);
            for queue in &queues {
                assert!(queue.waiting <= QUEUE_MAX);
            }
        }
    }

    #[test]
    fn test_step_is_deterministic_for_a_seed() {
        let mut a = roster();
        let mut b = roster();
        let mut rng_a = SplitMix64::new(5);
        let mut rng_b = SplitMix64::new(5);
        for _ in 0..50 {
            step(&mut a, &mut rng_a);
            step(&mut b, &mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_clamps_baseline() {
        let queue = CafeteriaQueue::new("Overfull", 200);
        assert_eq!(queue.waiting, QUEUE_MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_is_immediate() {
        let (mut feed, mut rx) = QueueFeed::start(roster(), DEFAULT_TICK, 1);
        let snapshot = rx.recv().await.unwrap();
        assert_eq!(snapshot.queues, roster());
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_closes_channel() {
        let (mut feed, mut rx) = QueueFeed::start(roster(), DEFAULT_TICK, 1);
        rx.recv().await.unwrap();

        feed.stop();
        feed.stop(); // no-op
        assert!(feed.is_stopped());
        assert!(feed.subscribe().is_none());

        // Drain anything buffered, then the channel reports closed.
        loop {
            match rx.recv().await {
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
                Err(other) => panic!("unexpected recv error: {other}"),
            }
        }
    }
}
