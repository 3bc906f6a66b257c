//! OrderService: the four comanda operations
//!
//! Every mutating call takes the table's lock, then runs its reads and
//! writes in one SQLite transaction. A dropped transaction rolls back, so an
//! early `?` return leaves nothing behind.

use super::error::{OrderError, OrderResult};
use super::locks::TableLocks;
use super::money;
use crate::db::repository::{RepoError, comanda, comanda_item, dining_table, employee, product};
use shared::models::TableStatus;
use shared::request::{AddItemRequest, FinalizeOrderRequest, RemoveItemRequest};
use shared::response::{OpenOrderSnapshot, SnapshotItem};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Result of [`OrderService::add_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddItemOutcome {
    pub comanda_id: i64,
    pub item_id: i64,
    /// `true` when this call opened the comanda (table went livre → ocupado)
    pub created_order: bool,
}

/// Result of [`OrderService::remove_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveItemOutcome {
    pub item_id: i64,
    pub comanda_id: i64,
}

/// Result of [`OrderService::finalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeOutcome {
    pub comanda_id: i64,
    pub table_id: i64,
    /// `false` when the comanda was already closed
    pub was_open: bool,
}

#[derive(Debug, Clone)]
pub struct OrderService {
    pool: SqlitePool,
    locks: Arc<TableLocks>,
}

impl OrderService {
    /// `pool` should be the writer pool; every operation here writes
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            locks: Arc::new(TableLocks::new()),
        }
    }

    /// Lock entries are only created for ids that name a real table
    async fn ensure_table(&self, table_id: i64) -> OrderResult<()> {
        match dining_table::find_by_id(&self.pool, table_id).await? {
            Some(_) => Ok(()),
            None => Err(OrderError::TableNotFound(table_id)),
        }
    }

    /// Append one unit of a product to the table's open comanda, opening one
    /// (and marking the table ocupado) if none exists
    pub async fn add_item(&self, req: AddItemRequest) -> OrderResult<AddItemOutcome> {
        let table_id = req.table_id.ok_or(OrderError::InvalidInput("mesa_id"))?;
        let product_id = req.product_id.ok_or(OrderError::InvalidInput("produto_id"))?;
        let employee_id = req.employee_id.ok_or(OrderError::InvalidInput("garcom_id"))?;

        self.ensure_table(table_id).await?;
        let _guard = self.locks.lock(table_id).await;
        let mut tx = self.pool.begin().await?;

        let table = dining_table::find_by_id(&mut *tx, table_id)
            .await?
            .ok_or(OrderError::TableNotFound(table_id))?;
        if product::find_by_id(&mut *tx, product_id).await?.is_none() {
            return Err(OrderError::ProductNotFound(product_id));
        }
        if employee::find_by_id(&mut *tx, employee_id).await?.is_none() {
            return Err(OrderError::EmployeeNotFound(employee_id));
        }

        let (comanda, created_order) = match comanda::find_open_by_table(&mut *tx, table.id).await? {
            Some(open) => (open, false),
            None => {
                let opened = comanda::create(&mut *tx, table.id, employee_id)
                    .await
                    .map_err(|e| match e {
                        RepoError::Duplicate(_) => OrderError::Conflict(table.id),
                        other => other.into(),
                    })?;
                dining_table::set_status(&mut *tx, table.id, TableStatus::Occupied).await?;
                (opened, true)
            }
        };

        let item = comanda_item::add(&mut *tx, comanda.id, product_id, 1).await?;
        tx.commit().await?;

        if created_order {
            tracing::info!(table_id, comanda_id = comanda.id, employee_id, "Comanda opened");
        }
        tracing::info!(table_id, comanda_id = comanda.id, item_id = item.id, product_id, "Item added");

        Ok(AddItemOutcome {
            comanda_id: comanda.id,
            item_id: item.id,
            created_order,
        })
    }

    /// Snapshot of the table's open comanda; refreshes the cached total
    pub async fn get_open_order(&self, table_id: i64) -> OrderResult<OpenOrderSnapshot> {
        self.ensure_table(table_id).await?;
        let _guard = self.locks.lock(table_id).await;
        let mut tx = self.pool.begin().await?;

        let table = dining_table::find_by_id(&mut *tx, table_id)
            .await?
            .ok_or(OrderError::TableNotFound(table_id))?;

        let Some(open) = comanda::find_open_by_table(&mut *tx, table.id).await? else {
            return Ok(OpenOrderSnapshot::empty(table.status));
        };

        let lines = comanda_item::find_by_comanda(&mut *tx, open.id).await?;
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            match product::find_by_id(&mut *tx, line.product_id).await? {
                Some(p) => items.push(SnapshotItem {
                    id: line.id,
                    name: p.name,
                    quantity: line.quantity,
                    unit_price: p.price,
                }),
                None => tracing::warn!(
                    comanda_id = open.id,
                    item_id = line.id,
                    product_id = line.product_id,
                    "Item references a missing product, skipped"
                ),
            }
        }

        let total = money::order_total(items.iter().map(|i| (i.unit_price, i.quantity)));
        comanda::update_total(&mut *tx, open.id, total).await?;
        tx.commit().await?;

        Ok(OpenOrderSnapshot {
            order_id: Some(open.id),
            items,
            total,
            table_status: table.status,
        })
    }

    /// Delete one line item. The cached total and the table status are left
    /// alone; the next snapshot recomputes the total.
    pub async fn remove_item(&self, req: RemoveItemRequest) -> OrderResult<RemoveItemOutcome> {
        let item_id = req.item_id.ok_or(OrderError::InvalidInput("item_id"))?;

        let item = comanda_item::find_by_id(&self.pool, item_id)
            .await?
            .ok_or(OrderError::ItemNotFound(item_id))?;
        let table_id = comanda::find_by_id(&self.pool, item.comanda_id)
            .await?
            .map(|c| c.table_id);

        let _guard = match table_id {
            Some(id) => Some(self.locks.lock(id).await),
            None => None,
        };

        if !comanda_item::delete(&self.pool, item_id).await? {
            // removed by a concurrent request while we waited for the lock
            return Err(OrderError::ItemNotFound(item_id));
        }

        tracing::info!(item_id, comanda_id = item.comanda_id, "Item removed");
        Ok(RemoveItemOutcome {
            item_id,
            comanda_id: item.comanda_id,
        })
    }

    /// Close the comanda and free its table
    ///
    /// Repeating the call on a closed comanda succeeds. The table is only set
    /// livre when no other comanda is open on it.
    pub async fn finalize(&self, req: FinalizeOrderRequest) -> OrderResult<FinalizeOutcome> {
        let comanda_id = req.order_id.ok_or(OrderError::InvalidInput("pedido_id"))?;

        let target = comanda::find_by_id(&self.pool, comanda_id)
            .await?
            .ok_or(OrderError::OrderNotFound(comanda_id))?;

        let _guard = self.locks.lock(target.table_id).await;
        let mut tx = self.pool.begin().await?;

        let Some(table) = dining_table::find_by_id(&mut *tx, target.table_id).await? else {
            tracing::error!(
                comanda_id,
                table_id = target.table_id,
                "Comanda references a missing table"
            );
            return Err(OrderError::TableNotFound(target.table_id));
        };

        comanda::close(&mut *tx, comanda_id).await?;

        let other_open = comanda::find_open_by_table(&mut *tx, table.id).await?;
        match other_open {
            None => dining_table::set_status(&mut *tx, table.id, TableStatus::Free).await?,
            Some(other) => tracing::warn!(
                comanda_id,
                open_comanda_id = other.id,
                table_id = table.id,
                "Table has another open comanda, status kept"
            ),
        }

        tx.commit().await?;

        let was_open = target.is_open();
        tracing::info!(comanda_id, table_id = table.id, was_open, "Comanda finalized");

        Ok(FinalizeOutcome {
            comanda_id,
            table_id: table.id,
            was_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_employee, test_pool};
    use shared::models::{DiningTableCreate, ProductCreate};

    struct Fixture {
        pool: SqlitePool,
        service: OrderService,
        employee_id: i64,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool().await;
        let employee_id = insert_employee(&pool, "Ana").await;
        Fixture {
            service: OrderService::new(pool.clone()),
            pool,
            employee_id,
        }
    }

    async fn insert_table(pool: &SqlitePool, number: i32) -> i64 {
        let mut conn = pool.acquire().await.unwrap();
        dining_table::create(
            &mut conn,
            DiningTableCreate {
                number,
                status: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn insert_product(pool: &SqlitePool, name: &str, price: f64) -> i64 {
        product::create(
            pool,
            ProductCreate {
                name: name.into(),
                description: None,
                price,
                category: "prato_principal".into(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn add_req(table_id: i64, product_id: i64, employee_id: i64) -> AddItemRequest {
        AddItemRequest {
            table_id: Some(table_id),
            product_id: Some(product_id),
            employee_id: Some(employee_id),
        }
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_on_free_table_opens_order() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 1).await;
        let risoto = insert_product(&f.pool, "Risoto Funghi", 45.5).await;

        let outcome = f.service.add_item(add_req(table, risoto, f.employee_id)).await.unwrap();
        assert!(outcome.created_order);

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.order_id, Some(outcome.comanda_id));
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, outcome.item_id);
        assert_eq!(snapshot.items[0].name, "Risoto Funghi");
        assert_eq!(snapshot.items[0].quantity, 1);
        assert_eq!(snapshot.total, 45.5);
        assert_eq!(snapshot.table_status, TableStatus::Occupied);
    }

    #[tokio::test]
    async fn test_second_add_reuses_order_without_merging() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 2).await;
        let soda = insert_product(&f.pool, "Refrigerante Lata", 6.0).await;

        let first = f.service.add_item(add_req(table, soda, f.employee_id)).await.unwrap();
        let second = f.service.add_item(add_req(table, soda, f.employee_id)).await.unwrap();

        assert_eq!(first.comanda_id, second.comanda_id);
        assert!(!second.created_order);
        assert_ne!(first.item_id, second.item_id);

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.total, 12.0);
    }

    #[tokio::test]
    async fn test_table_three_scenario() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 3).await;
        let a = insert_product(&f.pool, "A", 10.0).await;
        let b = insert_product(&f.pool, "B", 5.0).await;

        f.service.add_item(add_req(table, a, f.employee_id)).await.unwrap();
        let added_b = f.service.add_item(add_req(table, b, f.employee_id)).await.unwrap();

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.total, 15.0);

        f.service
            .remove_item(RemoveItemRequest {
                item_id: Some(added_b.item_id),
            })
            .await
            .unwrap();

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total, 10.0);
        assert!(snapshot.items.iter().all(|i| i.id != added_b.item_id));

        let finalized = f.service
            .finalize(FinalizeOrderRequest {
                order_id: snapshot.order_id,
            })
            .await
            .unwrap();
        assert!(finalized.was_open);

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.order_id, None);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, 0.0);
        assert_eq!(snapshot.table_status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_snapshot_writes_back_cached_total() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 4).await;
        let pudim = insert_product(&f.pool, "Pudim de Leite", 12.0).await;

        let outcome = f.service.add_item(add_req(table, pudim, f.employee_id)).await.unwrap();
        f.service.add_item(add_req(table, pudim, f.employee_id)).await.unwrap();
        f.service.get_open_order(table).await.unwrap();

        let stored = comanda::find_by_id(&f.pool, outcome.comanda_id).await.unwrap().unwrap();
        assert_eq!(stored.total, 24.0);
    }

    #[tokio::test]
    async fn test_get_on_never_used_table_is_empty() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 5).await;

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.order_id, None);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, 0.0);
        assert_eq!(snapshot.table_status, TableStatus::Free);
        assert_eq!(count(&f.pool, "comanda").await, 0);
    }

    #[tokio::test]
    async fn test_get_on_unknown_table() {
        let f = fixture().await;
        let err = f.service.get_open_order(99).await.unwrap_err();
        assert!(matches!(err, OrderError::TableNotFound(99)));
    }

    #[tokio::test]
    async fn test_snapshot_skips_missing_product() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 6).await;
        let kept = insert_product(&f.pool, "Kept", 8.0).await;
        let gone = insert_product(&f.pool, "Gone", 3.0).await;

        f.service.add_item(add_req(table, kept, f.employee_id)).await.unwrap();
        f.service.add_item(add_req(table, gone, f.employee_id)).await.unwrap();

        sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(gone)
            .execute(&f.pool)
            .await
            .unwrap();

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].name, "Kept");
        assert_eq!(snapshot.total, 8.0);
    }

    #[tokio::test]
    async fn test_add_on_unknown_table_writes_nothing() {
        let f = fixture().await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        let err = f.service.add_item(add_req(42, p, f.employee_id)).await.unwrap_err();
        assert!(matches!(err, OrderError::TableNotFound(42)));
        assert_eq!(count(&f.pool, "comanda").await, 0);
        assert_eq!(count(&f.pool, "comanda_item").await, 0);
    }

    #[tokio::test]
    async fn test_unknown_tables_leave_no_lock_entries() {
        let f = fixture().await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        for i in 0..50 {
            let err = f.service.get_open_order(1_000_000 + i).await.unwrap_err();
            assert!(matches!(err, OrderError::TableNotFound(_)));
            let err = f.service
                .add_item(add_req(2_000_000 + i, p, f.employee_id))
                .await
                .unwrap_err();
            assert!(matches!(err, OrderError::TableNotFound(_)));
        }
        assert!(f.service.locks.is_empty());

        let table = insert_table(&f.pool, 20).await;
        f.service.get_open_order(table).await.unwrap();
        assert_eq!(f.service.locks.len(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_product_writes_nothing() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 7).await;

        let err = f.service.add_item(add_req(table, 404, f.employee_id)).await.unwrap_err();
        assert!(matches!(err, OrderError::ProductNotFound(404)));
        assert_eq!(count(&f.pool, "comanda").await, 0);

        let status = dining_table::find_by_id(&f.pool, table).await.unwrap().unwrap().status;
        assert_eq!(status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_add_unknown_employee() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 8).await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        let err = f.service.add_item(add_req(table, p, 777)).await.unwrap_err();
        assert!(matches!(err, OrderError::EmployeeNotFound(777)));
        assert_eq!(count(&f.pool, "comanda").await, 0);
    }

    #[tokio::test]
    async fn test_add_missing_fields() {
        let f = fixture().await;

        let err = f.service
            .add_item(AddItemRequest {
                table_id: None,
                product_id: Some(1),
                employee_id: Some(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput("mesa_id")));

        let err = f.service
            .add_item(AddItemRequest {
                table_id: Some(1),
                product_id: None,
                employee_id: Some(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput("produto_id")));

        let err = f.service
            .add_item(AddItemRequest {
                table_id: Some(1),
                product_id: Some(1),
                employee_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput("garcom_id")));
    }

    #[tokio::test]
    async fn test_remove_item_errors() {
        let f = fixture().await;

        let err = f.service
            .remove_item(RemoveItemRequest { item_id: None })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput("item_id")));

        let err = f.service
            .remove_item(RemoveItemRequest { item_id: Some(5) })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ItemNotFound(5)));
    }

    #[tokio::test]
    async fn test_remove_last_item_keeps_table_occupied() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 9).await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        let added = f.service.add_item(add_req(table, p, f.employee_id)).await.unwrap();
        let removed = f.service
            .remove_item(RemoveItemRequest {
                item_id: Some(added.item_id),
            })
            .await
            .unwrap();
        assert_eq!(removed.comanda_id, added.comanda_id);

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.order_id, Some(added.comanda_id));
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, 0.0);
        assert_eq!(snapshot.table_status, TableStatus::Occupied);

        // removing it again is NotFound
        let err = f.service
            .remove_item(RemoveItemRequest {
                item_id: Some(added.item_id),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ItemNotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_leaves_cached_total_until_next_snapshot() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 14).await;
        let pudim = insert_product(&f.pool, "Pudim de Leite", 12.0).await;

        let first = f.service.add_item(add_req(table, pudim, f.employee_id)).await.unwrap();
        f.service.add_item(add_req(table, pudim, f.employee_id)).await.unwrap();
        assert_eq!(f.service.get_open_order(table).await.unwrap().total, 24.0);

        f.service
            .remove_item(RemoveItemRequest {
                item_id: Some(first.item_id),
            })
            .await
            .unwrap();

        let cached = comanda::find_by_id(&f.pool, first.comanda_id).await.unwrap().unwrap();
        assert_eq!(cached.total, 24.0);

        assert_eq!(f.service.get_open_order(table).await.unwrap().total, 12.0);
        let cached = comanda::find_by_id(&f.pool, first.comanda_id).await.unwrap().unwrap();
        assert_eq!(cached.total, 12.0);
    }

    #[tokio::test]
    async fn test_finalize_twice_succeeds() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 10).await;
        let p = insert_product(&f.pool, "A", 10.0).await;
        let added = f.service.add_item(add_req(table, p, f.employee_id)).await.unwrap();

        let req = FinalizeOrderRequest {
            order_id: Some(added.comanda_id),
        };
        let first = f.service.finalize(req.clone()).await.unwrap();
        let second = f.service.finalize(req).await.unwrap();
        assert!(first.was_open);
        assert!(!second.was_open);

        let status = dining_table::find_by_id(&f.pool, table).await.unwrap().unwrap().status;
        assert_eq!(status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_finalize_old_order_keeps_new_open_order() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 11).await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        let old = f.service.add_item(add_req(table, p, f.employee_id)).await.unwrap();
        f.service
            .finalize(FinalizeOrderRequest {
                order_id: Some(old.comanda_id),
            })
            .await
            .unwrap();

        let new = f.service.add_item(add_req(table, p, f.employee_id)).await.unwrap();
        assert!(new.created_order);
        assert_ne!(new.comanda_id, old.comanda_id);

        f.service
            .finalize(FinalizeOrderRequest {
                order_id: Some(old.comanda_id),
            })
            .await
            .unwrap();

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.order_id, Some(new.comanda_id));
        assert_eq!(snapshot.table_status, TableStatus::Occupied);
    }

    #[tokio::test]
    async fn test_finalize_errors() {
        let f = fixture().await;

        let err = f.service
            .finalize(FinalizeOrderRequest { order_id: None })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput("pedido_id")));

        let err = f.service
            .finalize(FinalizeOrderRequest { order_id: Some(31) })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::OrderNotFound(31)));
    }

    #[tokio::test]
    async fn test_finalize_with_missing_table() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 12).await;
        let p = insert_product(&f.pool, "A", 10.0).await;
        let added = f.service.add_item(add_req(table, p, f.employee_id)).await.unwrap();

        sqlx::query("PRAGMA foreign_keys = OFF").execute(&f.pool).await.unwrap();
        sqlx::query("DELETE FROM dining_table WHERE id = ?")
            .bind(table)
            .execute(&f.pool)
            .await
            .unwrap();

        let err = f.service
            .finalize(FinalizeOrderRequest {
                order_id: Some(added.comanda_id),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::TableNotFound(id) if id == table));

        let stored = comanda::find_by_id(&f.pool, added.comanda_id).await.unwrap().unwrap();
        assert!(stored.is_open());
    }

    #[tokio::test]
    async fn test_concurrent_adds_open_one_order() {
        let f = fixture().await;
        let table = insert_table(&f.pool, 13).await;
        let p = insert_product(&f.pool, "A", 10.0).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = f.service.clone();
            let employee_id = f.employee_id;
            handles.push(tokio::spawn(async move {
                service.add_item(add_req(table, p, employee_id)).await
            }));
        }

        let mut opened = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().created_order {
                opened += 1;
            }
        }
        assert_eq!(opened, 1);
        assert_eq!(count(&f.pool, "comanda").await, 1);
        assert_eq!(count(&f.pool, "comanda_item").await, 8);

        let snapshot = f.service.get_open_order(table).await.unwrap();
        assert_eq!(snapshot.total, 80.0);
    }
}
