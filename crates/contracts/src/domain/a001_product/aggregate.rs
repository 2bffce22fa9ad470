use serde::{Deserialize, Serialize};

/// Товар магазина, как он хранится в `stores/{storeId}/products/{productId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Разобрать снимок узла `products` в список, отсортированный по названию.
    ///
    /// Ключ узла подставляется в `id`, если поле отсутствует.
    /// Элементы, которые не удаётся десериализовать, пропускаются.
    pub fn list_from_snapshot(value: &serde_json::Value) -> Vec<Product> {
        let Some(map) = value.as_object() else {
            return Vec::new();
        };

        let mut products: Vec<Product> = map
            .iter()
            .filter_map(|(key, raw)| {
                let mut product: Product = serde_json::from_value(raw.clone()).ok()?;
                if product.id.is_empty() {
                    product.id = key.clone();
                }
                Some(product)
            })
            .collect();

        products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        products
    }
}

/// Элемент выпадающего списка выбора товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductOption {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        }
    }
}

impl From<Product> for ProductOption {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
