use crate::shared::firebase::RemoteStore;
use contracts::domain::a001_product::Product;
use contracts::shared::paths;

/// Каталог магазина, отсортированный по названию
pub async fn fetch_products<S: RemoteStore + ?Sized>(
    store: &S,
    store_id: &str,
) -> Result<Vec<Product>, String> {
    let path = paths::store_products(store_id);
    match store.get(&path).await {
        Ok(Some(value)) => Ok(Product::list_from_snapshot(&value)),
        Ok(None) => Ok(Vec::new()),
        Err(e) => {
            log::error!("Lỗi tải danh sách sản phẩm {}: {}", path, e);
            Err(format!("Lỗi tải danh sách sản phẩm: {}", e))
        }
    }
}
