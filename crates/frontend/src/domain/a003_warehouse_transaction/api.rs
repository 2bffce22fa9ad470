use crate::shared::firebase::RemoteStore;
use contracts::domain::a003_warehouse_transaction::WarehouseTransaction;
use contracts::shared::paths;

/// Копии проводок в узле магазина
pub async fn fetch_store_transactions<S: RemoteStore + ?Sized>(
    store: &S,
    store_id: &str,
) -> Result<Vec<WarehouseTransaction>, String> {
    let path = paths::store_warehouse_transactions(store_id);
    match store.get(&path).await {
        Ok(Some(value)) => Ok(WarehouseTransaction::list_from_snapshot(&value)),
        Ok(None) => Ok(Vec::new()),
        Err(e) => {
            log::error!("Lỗi tải giao dịch kho {}: {}", path, e);
            Err(format!("Lỗi tải giao dịch kho: {}", e))
        }
    }
}
