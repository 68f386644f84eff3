//! Per-match write serialization.
//!
//! This module provides the `MatchLockService`, which hands out one async mutex per match id.
//! The match service holds the lock across the match write and the settlement that follows
//! it, so two requests finishing the same match cannot both observe a derived transaction as
//! missing and race to create it. Locks for different matches never contend, and a match's
//! entry is dropped from the table once no request holds or awaits it, at the latest on the
//! next call to `lock`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OwnedMutexGuard;

type LockTable = HashMap<String, Arc<tokio::sync::Mutex<()>>>;

/// Registry of per-match mutexes shared through `AppState`.
///
/// The table itself is guarded by a std mutex since it is only held for map lookups and
/// must be reachable from `Drop`.
#[derive(Clone, Default)]
pub struct MatchLockService {
    locks: Arc<Mutex<LockTable>>,
}

impl MatchLockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `match_id`.
    ///
    /// # Arguments
    /// - `match_id` - Id of the match about to be written
    ///
    /// # Returns
    /// - `MatchLockGuard` - Holds the lock until dropped
    pub async fn lock(&self, match_id: &str) -> MatchLockGuard {
        let mutex = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries left behind by waiters cancelled after the holder released.
            locks.retain(|_, mutex| Arc::strong_count(mutex) > 1);
            locks
                .entry(match_id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };

        let guard = mutex.lock_owned().await;

        MatchLockGuard {
            locks: self.locks.clone(),
            match_id: match_id.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of matches with a live lock entry.
    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Exclusive access to one match; released on drop.
pub struct MatchLockGuard {
    locks: Arc<Mutex<LockTable>>,
    match_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for MatchLockGuard {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);

        // Release first so the table entry plus waiters are the only remaining holders.
        drop(self.guard.take());

        if let Some(mutex) = locks.get(&self.match_id) {
            if Arc::strong_count(mutex) == 1 {
                locks.remove(&self.match_id);
            }
        }
    }
}
