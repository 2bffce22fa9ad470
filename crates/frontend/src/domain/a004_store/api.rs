use crate::shared::firebase::RemoteStore;
use contracts::domain::a004_store::Store;
use contracts::shared::paths;

/// Список магазинов, отсортированный по названию
pub async fn fetch_stores<S: RemoteStore + ?Sized>(store: &S) -> Result<Vec<Store>, String> {
    match store.get(&paths::stores()).await {
        Ok(Some(value)) => Ok(Store::list_from_snapshot(&value)),
        Ok(None) => Ok(Vec::new()),
        Err(e) => {
            log::error!("Lỗi tải danh sách cửa hàng: {}", e);
            Err(format!("Lỗi tải danh sách cửa hàng: {}", e))
        }
    }
}
