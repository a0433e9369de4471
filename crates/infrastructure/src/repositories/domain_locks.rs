use dashmap::DashMap;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = Arc<DashMap<Arc<str>, Arc<Mutex<()>>>>;

/// Per-domain async mutexes, created on demand and dropped once nobody holds
/// or waits on them.
#[derive(Default)]
pub struct DomainLocks {
    locks: LockMap,
}

pub struct DomainLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: LockMap,
    key: Arc<str>,
}

/// A waiter in `lock`. Fields drop in order, so a cancelled acquire releases
/// its handle on the mutex before `slot` checks whether the entry is idle.
struct PendingLock<F> {
    acquire: Pin<Box<F>>,
    slot: DomainLockGuard,
}

impl DomainLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, domain: &str) -> DomainLockGuard {
        let key: Arc<str> = Arc::from(domain);
        let mutex = self
            .locks
            .entry(Arc::clone(&key))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let mut pending = PendingLock {
            acquire: Box::pin(mutex.lock_owned()),
            slot: DomainLockGuard {
                guard: None,
                locks: Arc::clone(&self.locks),
                key,
            },
        };
        let guard = pending.acquire.as_mut().await;

        let mut slot = pending.slot;
        slot.guard = Some(guard);
        slot
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Drop for DomainLockGuard {
    fn drop(&mut self) {
        self.guard.take();
        // Only the map's own reference left: no holder and no waiter.
        self.locks.remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
