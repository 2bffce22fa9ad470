//! Запись складских проводок по созданному заказу.
//!
//! Каждая строка заказа пишется дважды: в глобальный журнал
//! `warehouseTransactions/{id}` и в копию магазина
//! `stores/{storeId}/warehouseTransactions/{id}`. Ошибки только логируются.

use crate::shared::firebase::{put_typed, RemoteStore};
use chrono::{DateTime, Utc};
use contracts::domain::a002_order::Order;
use contracts::domain::a003_warehouse_transaction::WarehouseTransaction;
use contracts::shared::paths;
use futures::future::join;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutSummary {
    /// Сколько проводок построено (по одной на строку заказа)
    pub attempted: usize,
    pub global_written: usize,
    pub store_written: usize,
    /// Неудачные записи, обе копии считаются отдельно
    pub failures: usize,
}

impl FanOutSummary {
    pub fn is_complete(&self) -> bool {
        self.failures == 0
    }
}

impl std::ops::AddAssign for FanOutSummary {
    fn add_assign(&mut self, other: Self) {
        self.attempted += other.attempted;
        self.global_written += other.global_written;
        self.store_written += other.store_written;
        self.failures += other.failures;
    }
}

/// Строки обрабатываются строго по очереди; две записи одной строки идут параллельно.
pub async fn log_order_transactions<S>(
    store: &S,
    order: &Order,
    now: DateTime<Utc>,
) -> FanOutSummary
where
    S: RemoteStore + ?Sized,
{
    let mut summary = FanOutSummary::default();

    for (position, item) in order.items.iter().enumerate() {
        let tx = WarehouseTransaction::for_order_item(order, position, item, now);
        summary.attempted += 1;

        let global_path = paths::warehouse_transaction(&tx.id);
        let store_path = paths::store_warehouse_transaction(&order.store_id, &tx.id);

        let (global, scoped) = join(
            put_typed(store, &global_path, &tx),
            put_typed(store, &store_path, &tx),
        )
        .await;

        match global {
            Ok(()) => summary.global_written += 1,
            Err(e) => {
                summary.failures += 1;
                log::error!("Lỗi ghi giao dịch kho {}: {}", global_path, e);
            }
        }
        match scoped {
            Ok(()) => summary.store_written += 1,
            Err(e) => {
                summary.failures += 1;
                log::error!("Lỗi ghi giao dịch kho {}: {}", store_path, e);
            }
        }
    }

    if summary.attempted > 0 {
        log::info!(
            "Đơn {}: {} giao dịch kho, {} lỗi",
            order.id,
            summary.attempted,
            summary.failures
        );
    }
    summary
}
