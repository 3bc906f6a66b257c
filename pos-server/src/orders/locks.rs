//! Per-table mutual exclusion
//!
//! Read-check-create on a table (find the open comanda, else open one) must
//! not interleave with another request for the same table.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily created async mutex per table id
#[derive(Debug, Default)]
pub struct TableLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl TableLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `table_id`; released when the guard drops
    pub async fn lock(&self, table_id: i64) -> OwnedMutexGuard<()> {
        // 先克隆 Arc 再 await，避免持有 DashMap 分片锁
        let mutex = self
            .locks
            .entry(table_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Number of tables that have been locked at least once
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
