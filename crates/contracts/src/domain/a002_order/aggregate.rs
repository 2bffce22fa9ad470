use serde::{Deserialize, Serialize};

use super::enums::PaymentStatus;

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Заказ магазина: `stores/{storeId}/orders/{orderId}`
///
/// `order_type` хранится сырым кодом (`tmdt`, `retail`, `wholesale`),
/// чтобы старые записи с неизвестным типом тоже читались.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub store_id: String,
    #[serde(default)]
    pub order_type: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub note: String,
    /// RFC 3339
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn recalculate_total(&mut self) {
        self.total_amount = self.items.iter().map(OrderItem::total).sum();
    }

    /// Разобрать снимок `orders` в список, новые заказы первыми
    pub fn list_from_snapshot(value: &serde_json::Value) -> Vec<Order> {
        let Some(map) = value.as_object() else {
            return Vec::new();
        };

        let mut orders: Vec<Order> = map
            .iter()
            .filter_map(|(key, raw)| {
                let mut order: Order = serde_json::from_value(raw.clone()).ok()?;
                if order.id.is_empty() {
                    order.id = key.clone();
                }
                Some(order)
            })
            .collect();

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        orders
    }
}
