//! Cancellable snapshot iteration.
//!
//! This module provides [`IterSession`], the pull-based traversal handle
//! returned by `iter_session` on every set.
//!
//! # Mechanism
//!
//! Creating a session snapshots the set's elements and spawns a producer
//! thread that hands them over one at a time through a rendezvous channel
//! (a bounded channel of capacity zero: each send blocks until the consumer
//! takes the value). Before every send the producer checks a stop flag and
//! exits once it is raised or once the consuming side is gone, so a stopped
//! or abandoned session never leaks the thread.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::element::Element;

/// A snapshot traversal of a set with explicit early stop.
///
/// The session iterates the elements the set held at creation time, in
/// unspecified order; later mutations of the set are never observed. The
/// consumer pulls elements through the [`Iterator`] impl at its own pace.
///
/// # Stopping
///
/// Call [`stop`](Self::stop) on every exit path when abandoning a
/// partially-consumed session: it signals the producer, disconnects the
/// channel, and joins the thread. Dropping the session performs the same
/// shutdown as a backstop. Exhausting the snapshot ends the producer
/// naturally and `next` returns `None` from then on.
///
/// # Examples
///
/// ```rust
/// use cantor::elements;
/// use cantor::set::{Set, UnsyncSet};
///
/// let set = UnsyncSet::from_elements(elements![1_i64, 2_i64, 3_i64]);
///
/// let mut session = set.iter_session();
/// let first = session.next();
/// assert!(first.is_some());
/// session.stop(); // early exit without consuming the rest
/// assert_eq!(session.next(), None);
/// ```
pub struct IterSession {
    receiver: Option<Receiver<Element>>,
    stop: Arc<AtomicBool>,
    producer: Option<JoinHandle<()>>,
}

impl IterSession {
    /// Spawns the producer over an already-materialized snapshot.
    pub(crate) fn new(snapshot: Vec<Element>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::sync_channel(0);
        let producer_stop = Arc::clone(&stop);

        let producer = thread::spawn(move || {
            for element in snapshot {
                if producer_stop.load(Ordering::Acquire) {
                    break;
                }
                // A disconnected receiver also ends the traversal; a send
                // blocked in the rendezvous unblocks the moment the
                // consuming side goes away.
                if sender.send(element).is_err() {
                    break;
                }
            }
        });

        Self {
            receiver: Some(receiver),
            stop,
            producer: Some(producer),
        }
    }

    /// Stops the traversal and releases the producer.
    ///
    /// Signals the producer to cease sending, disconnects the channel, and
    /// joins the thread. Idempotent: stopping a stopped or exhausted
    /// session is a no-op, and `next` returns `None` afterwards.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        drop(self.receiver.take());
        if let Some(producer) = self.producer.take() {
            let _ = producer.join();
        }
    }
}

impl Iterator for IterSession {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver
            .as_ref()
            .and_then(|receiver| receiver.recv().ok())
    }
}

impl Drop for IterSession {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for IterSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IterSession")
            .field("stopped", &self.stop.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}
