//! Пути в realtime-базе. Все пути строятся только здесь.

fn segment(raw: &str) -> &str {
    raw.trim_matches('/')
}

pub fn stores() -> String {
    "stores".to_string()
}

pub fn store_products(store_id: &str) -> String {
    format!("stores/{}/products", segment(store_id))
}

pub fn store_orders(store_id: &str) -> String {
    format!("stores/{}/orders", segment(store_id))
}

pub fn store_order(store_id: &str, order_id: &str) -> String {
    format!("{}/{}", store_orders(store_id), segment(order_id))
}

pub fn store_order_payment_status(store_id: &str, order_id: &str) -> String {
    format!("{}/paymentStatus", store_order(store_id, order_id))
}

pub fn warehouse_transaction(transaction_id: &str) -> String {
    format!("warehouseTransactions/{}", segment(transaction_id))
}

pub fn store_warehouse_transactions(store_id: &str) -> String {
    format!("stores/{}/warehouseTransactions", segment(store_id))
}

pub fn store_warehouse_transaction(store_id: &str, transaction_id: &str) -> String {
    format!(
        "{}/{}",
        store_warehouse_transactions(store_id),
        segment(transaction_id)
    )
}
