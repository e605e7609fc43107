//! Keyed Mutex
//!
//! Async mutual exclusion scoped to a key. Holders of different keys never
//! contend; holders of the same key are served one at a time.
//! Idle keys are evicted when the last holder releases, and swept on the next
//! `lock` when a waiter was dropped before acquiring.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-key async lock table
pub struct KeyedMutex<K>
where
    K: Eq + Hash + Clone,
{
    slots: Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
}

/// Guard returned by [`KeyedMutex::lock`]; releases the key on drop
pub struct KeyedGuard<'a, K>
where
    K: Eq + Hash + Clone,
{
    owner: &'a KeyedMutex<K>,
    key: K,
    slot: Arc<AsyncMutex<()>>,
    _guard: OwnedMutexGuard<()>,
}

impl<K> KeyedMutex<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Wait until `key` is free and hold it until the guard is dropped
    pub async fn lock(&self, key: K) -> KeyedGuard<'_, K> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            prune_idle(&mut slots);
            slots
                .entry(key.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        let guard = slot.clone().lock_owned().await;

        KeyedGuard {
            owner: self,
            key,
            slot,
            _guard: guard,
        }
    }

    /// Number of keys currently held or waited on
    pub fn active_keys(&self) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        prune_idle(&mut slots);
        slots.len()
    }
}

// Slots are only cloned under the table lock, so a count of 1 means nobody holds or waits
fn prune_idle<K>(slots: &mut HashMap<K, Arc<AsyncMutex<()>>>) {
    slots.retain(|_, slot| Arc::strong_count(slot) > 1);
}

impl<K> Default for KeyedMutex<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for KeyedGuard<'_, K>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        let mut slots = self
            .owner
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // table + this guard's slot + the owned mutex guard
        if Arc::strong_count(&self.slot) <= 3 {
            slots.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_key_is_serialized() {
        let locks = Arc::new(KeyedMutex::<String>::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let locks = locks.clone();
            let inside = inside.clone();
            let max_inside = max_inside.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.lock("u1:1".to_string()).await;
                let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                max_inside.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(2)).await;
                inside.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        assert_eq!(locks.active_keys(), 0);
    }

    #[tokio::test]
    async fn test_different_keys_do_not_block() {
        let locks = KeyedMutex::<&'static str>::new();
        let _a = locks.lock("a").await;

        let b = tokio::time::timeout(Duration::from_millis(200), locks.lock("b")).await;
        assert!(b.is_ok());
        assert_eq!(locks.active_keys(), 2);
    }

    #[tokio::test]
    async fn test_idle_key_is_evicted() {
        let locks = KeyedMutex::<u32>::new();
        {
            let _guard = locks.lock(7).await;
            assert_eq!(locks.active_keys(), 1);
        }
        assert_eq!(locks.active_keys(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_waiter_leaves_no_slot() {
        let locks = KeyedMutex::<u32>::new();
        let holder = locks.lock(1).await;

        let mut waiter = Box::pin(locks.lock(1));
        let pending = tokio::time::timeout(Duration::from_millis(10), &mut waiter).await;
        assert!(pending.is_err());

        // Holder releases while the waiter is still queued, then the waiter is abandoned
        drop(holder);
        drop(waiter);

        assert_eq!(locks.active_keys(), 0);

        let _again = locks.lock(1).await;
        assert_eq!(locks.active_keys(), 1);
    }
}
