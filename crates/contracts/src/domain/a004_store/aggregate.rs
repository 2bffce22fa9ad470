use serde::{Deserialize, Serialize};

/// Магазин сети (cửa hàng)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

impl Store {
    /// Разобрать снимок `stores` (`{ id: {...} }`) в список, отсортированный по имени
    pub fn list_from_snapshot(value: &serde_json::Value) -> Vec<Store> {
        let Some(map) = value.as_object() else {
            return Vec::new();
        };

        let mut stores: Vec<Store> = map
            .iter()
            .filter_map(|(key, raw)| {
                let mut store: Store = serde_json::from_value(raw.clone()).ok()?;
                if store.id.is_empty() {
                    store.id = key.clone();
                }
                Some(store)
            })
            .collect();

        stores.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        stores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_from_snapshot_fills_missing_id() {
        let snapshot = json!({
            "s2": { "name": "Chi nhánh Quận 3" },
            "s1": { "id": "s1", "name": "Cửa hàng chính", "address": "12 Lê Lợi" },
            "broken": 42
        });

        let stores = Store::list_from_snapshot(&snapshot);
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].id, "s2");
        assert_eq!(stores[1].address, "12 Lê Lợi");
    }
}
