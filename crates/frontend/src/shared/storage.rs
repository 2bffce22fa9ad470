use contracts::domain::a004_store::Store;
use web_sys::window;

const CURRENT_STORE_KEY: &str = "currentStore";
const SELECTED_STORE_ID_KEY: &str = "selectedStoreId";
const SELECTED_STORE_DATA_KEY: &str = "selectedStoreData";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw value from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Выбранный магазин, восстановленный из localStorage
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSelection {
    pub store_id: String,
    pub store: Option<Store>,
}

/// Восстановить выбор магазина из сырых значений localStorage.
///
/// `selectedStoreId` важнее устаревшего `currentStore`; данные магазина
/// используются только если их id совпадает с выбранным.
pub fn resolve_store_selection(
    selected_id: Option<&str>,
    current_store: Option<&str>,
    store_data: Option<&str>,
) -> Option<StoreSelection> {
    let store_id = selected_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| current_store.map(str::trim).filter(|s| !s.is_empty()))?
        .to_string();

    let store = store_data
        .and_then(|raw| serde_json::from_str::<Store>(raw).ok())
        .filter(|s| s.id == store_id);

    Some(StoreSelection { store_id, store })
}

/// Load the persisted store selection
pub fn load_store_selection() -> Option<StoreSelection> {
    resolve_store_selection(
        get_item(SELECTED_STORE_ID_KEY).as_deref(),
        get_item(CURRENT_STORE_KEY).as_deref(),
        get_item(SELECTED_STORE_DATA_KEY).as_deref(),
    )
}

/// Persist the selected store under all keys read by other pages
pub fn save_store_selection(store: &Store) {
    set_item(SELECTED_STORE_ID_KEY, &store.id);
    set_item(CURRENT_STORE_KEY, &store.id);
    match serde_json::to_string(store) {
        Ok(json) => set_item(SELECTED_STORE_DATA_KEY, &json),
        Err(e) => log::error!("Failed to serialize store {}: {}", store.id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_id_wins_over_current_store() {
        let selection = resolve_store_selection(Some("s2"), Some("s1"), None).unwrap();
        assert_eq!(selection.store_id, "s2");
        assert_eq!(selection.store, None);
    }

    #[test]
    fn test_falls_back_to_current_store() {
        let selection = resolve_store_selection(Some("  "), Some("s1"), None).unwrap();
        assert_eq!(selection.store_id, "s1");
    }

    #[test]
    fn test_store_data_must_match_id() {
        let data = r#"{"id":"s1","name":"Cửa hàng chính"}"#;
        let matched = resolve_store_selection(Some("s1"), None, Some(data)).unwrap();
        assert_eq!(matched.store.unwrap().name, "Cửa hàng chính");

        let mismatched = resolve_store_selection(Some("s2"), None, Some(data)).unwrap();
        assert_eq!(mismatched.store, None);
    }

    #[test]
    fn test_nothing_selected() {
        assert_eq!(resolve_store_selection(None, None, Some("{}")), None);
    }
}
