use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Monotonic request counter. Issuing a new ticket supersedes every earlier one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }

    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.seq == self.latest.load(Ordering::Acquire)
    }
}

impl CancelToken for RequestTicket {
    #[inline]
    fn is_cancelled(&self) -> bool {
        !self.is_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase_from_one() {
        let sequence = RequestSequence::new();
        assert_eq!(sequence.latest(), 0);

        let first = sequence.issue();
        let second = sequence.issue();

        assert_eq!(first.seq(), 1);
        assert_eq!(second.seq(), 2);
        assert_eq!(sequence.latest(), 2);
    }

    #[test]
    fn newer_ticket_cancels_older_one() {
        let sequence = RequestSequence::new();
        let first = sequence.issue();
        assert!(first.is_current());

        let second = sequence.issue();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn cloned_sequences_share_the_counter() {
        let sequence = RequestSequence::new();
        let other = sequence.clone();

        let ticket = sequence.issue();
        other.issue();

        assert!(!ticket.is_current());
    }
}
