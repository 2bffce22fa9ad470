use crate::shared::firebase::{put_typed, RemoteStore, Subscription};
use contracts::domain::a002_order::{Order, PaymentStatus};
use contracts::shared::paths;
use std::rc::Rc;

pub fn new_order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Пишется только скалярное поле `paymentStatus`
pub async fn update_payment_status<S>(
    store: &S,
    store_id: &str,
    order_id: &str,
    status: PaymentStatus,
) -> Result<(), String>
where
    S: RemoteStore + ?Sized,
{
    let path = paths::store_order_payment_status(store_id, order_id);
    put_typed(store, &path, &status).await.map_err(|e| {
        log::error!("Lỗi cập nhật trạng thái thanh toán {}: {}", path, e);
        e.to_string()
    })
}

/// Подписка на заказы магазина; колбэк получает список, новые первыми
pub fn subscribe_orders<S>(
    store: &S,
    store_id: &str,
    on_orders: impl Fn(Vec<Order>) + 'static,
) -> Result<Subscription, String>
where
    S: RemoteStore + ?Sized,
{
    store
        .subscribe(
            &paths::store_orders(store_id),
            Rc::new(move |value: Option<serde_json::Value>| {
                let orders = value
                    .as_ref()
                    .map(Order::list_from_snapshot)
                    .unwrap_or_default();
                on_orders(orders);
            }),
        )
        .map_err(|e| {
            log::error!("Lỗi đăng ký theo dõi đơn hàng: {}", e);
            e.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::firebase::memory::MemoryStore;
    use serde_json::json;
    use std::cell::RefCell;

    fn seeded() -> MemoryStore {
        MemoryStore::with_root(json!({
            "stores": {"s1": {"orders": {
                "o1": {"customerName": "An", "paymentStatus": "unpaid", "totalAmount": 100.0,
                       "createdAt": "2024-01-01T00:00:00.000Z"}
            }}}
        }))
    }

    #[tokio::test]
    async fn test_update_writes_only_status_field() {
        let store = seeded();
        update_payment_status(&store, "s1", "o1", PaymentStatus::Paid)
            .await
            .unwrap();

        assert_eq!(store.writes(), vec!["stores/s1/orders/o1/paymentStatus".to_string()]);
        let order = store.value_at("stores/s1/orders/o1").unwrap();
        assert_eq!(order["paymentStatus"], "paid");
        assert_eq!(order["customerName"], "An");
    }

    #[tokio::test]
    async fn test_update_failure_is_reported() {
        let store = seeded();
        store.fail_path(&paths::store_order_payment_status("s1", "o1"));
        assert!(update_payment_status(&store, "s1", "o1", PaymentStatus::Paid)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_subscription_delivers_order_lists() {
        let store = seeded();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();
        let sub = subscribe_orders(&store, "s1", move |orders| sink.borrow_mut().push(orders.len()))
            .unwrap();

        store
            .set(
                "stores/s1/orders/o2",
                &json!({"customerName": "Bình", "createdAt": "2024-02-01T00:00:00.000Z"}),
            )
            .await
            .unwrap();
        assert_eq!(seen.borrow().last(), Some(&2));

        sub.unsubscribe();
        assert_eq!(store.listener_count(), 0);
    }
}
