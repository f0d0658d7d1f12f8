use std::collections::VecDeque;

use tracing::debug;

use crate::core::Transaction;

/// Transactions of one group, newest first.
#[derive(Debug, Default, Clone)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, user: &str, amount: f64) {
        self.entries.push_front(Transaction::new(user, amount));
    }

    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().take(count)
    }

    /// Drops every transaction made by `user`, returning how many went.
    pub fn purge_user(&mut self, user: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|xct| xct.user != user);

        let purged = before - self.entries.len();
        if purged > 0 {
            debug!(user, purged, "transactions purged");
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn log_of(entries: &[(&str, f64)]) -> TransactionLog {
        let mut log = TransactionLog::new();
        for (user, amount) in entries {
            log.record(user, *amount);
        }
        log
    }

    #[test]
    fn test_recent_is_newest_first() {
        let log = log_of(&[("alice", 1.0), ("bob", 2.0), ("carol", 3.0)]);

        let recent: Vec<&str> = log.recent(2).map(|x| x.user.as_str()).collect();
        assert_eq!(recent, vec!["carol", "bob"]);
    }

    #[test]
    fn test_recent_caps_at_log_length() {
        let log = log_of(&[("alice", 1.0), ("bob", 2.0)]);

        assert_eq!(log.recent(10).count(), 2);
        assert_eq!(log.recent(0).count(), 0);
        assert_eq!(TransactionLog::new().recent(5).count(), 0);
    }

    #[test]
    fn test_purge_user() {
        let mut log = log_of(&[("alice", 1.0), ("bob", 2.0), ("alice", 3.0)]);

        assert_eq!(log.purge_user("alice"), 2);
        assert_eq!(log.len(), 1);

        let remaining: Vec<_> = log.recent(5).cloned().collect();
        assert_eq!(remaining, vec![Transaction::new("bob", 2.0)]);
    }

    #[test]
    fn test_purge_unknown_user_is_noop() {
        let mut log = log_of(&[("alice", 1.0)]);

        assert_eq!(log.purge_user("ghost"), 0);
        assert_eq!(log.len(), 1);
    }
}
