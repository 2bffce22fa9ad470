use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_order::{order_type_label, Order, OrderItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    In,
    Out,
}

/// Складская проводка. Пишется дважды: глобально и в узел магазина.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_value: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub order_type: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub store_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl WarehouseTransaction {
    /// Построить расходную проводку для строки созданного заказа.
    ///
    /// `position` входит в id: один товар может встретиться в заказе дважды
    /// в пределах одной миллисекунды.
    pub fn for_order_item(
        order: &Order,
        position: usize,
        item: &OrderItem,
        now: DateTime<Utc>,
    ) -> Self {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            id: format!(
                "{}_{}_{}_{}",
                order.id,
                item.product_id,
                now.timestamp_millis(),
                position
            ),
            kind: TransactionKind::Out,
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            product_sku: item.product_sku.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_value: item.total(),
            reason: format!(
                "Xuất kho đơn {} #{}",
                order_type_label(&order.order_type),
                order.id
            ),
            order_type: order.order_type.clone(),
            order_id: order.id.clone(),
            store_id: order.store_id.clone(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Разобрать снимок узла проводок; битые записи пропускаются
    pub fn list_from_snapshot(value: &serde_json::Value) -> Vec<WarehouseTransaction> {
        let Some(map) = value.as_object() else {
            return Vec::new();
        };
        map.values()
            .filter_map(|raw| serde_json::from_value(raw.clone()).ok())
            .collect()
    }
}
