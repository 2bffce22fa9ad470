//! Сборка заказов из форм и запись в базу.

use super::form_set::{FormField, OrderFormDraft, WidgetInstance};
use crate::domain::a003_warehouse_transaction::{log_order_transactions, FanOutSummary};
use crate::shared::firebase::{put_typed, RemoteStore};
use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::{Order, OrderItem, OrderType, PaymentStatus};
use contracts::shared::paths;
use std::fmt;

/// Ошибка проверки одной формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    pub index: usize,
    pub message: String,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Đơn hàng #{}: {}", self.index, self.message)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn validate(draft: &OrderFormDraft, order_type: OrderType) -> Result<(u32, f64), String> {
    if draft.field(FormField::CustomerName).trim().is_empty() {
        return Err("Vui lòng nhập tên khách hàng".into());
    }
    if draft.product.is_none() {
        return Err("Vui lòng chọn sản phẩm".into());
    }
    let quantity = match draft.quantity() {
        Some(q) if q > 0 => q,
        _ => return Err("Số lượng phải là số nguyên dương".into()),
    };
    let unit_price = match draft.unit_price() {
        Some(p) if p.is_finite() && p >= 0.0 => p,
        _ => return Err("Đơn giá không hợp lệ".into()),
    };
    if order_type == OrderType::Ecommerce && draft.field(FormField::Platform).trim().is_empty() {
        return Err("Vui lòng chọn sàn TMĐT".into());
    }
    Ok((quantity, unit_price))
}

/// Проверить все формы и построить по заказу на форму.
/// Пока есть хоть одна ошибка, ничего не возвращается.
pub fn build_orders(
    drafts: &[OrderFormDraft],
    catalog: &[Product],
    order_type: OrderType,
    store_id: &str,
    now: DateTime<Utc>,
    id_gen: &mut dyn FnMut() -> String,
) -> Result<Vec<Order>, Vec<DraftError>> {
    let mut errors = Vec::new();
    let mut validated = Vec::new();

    for draft in drafts {
        match validate(draft, order_type) {
            Ok(values) => validated.push((draft, values)),
            Err(message) => errors.push(DraftError {
                index: draft.index,
                message,
            }),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let ecommerce = order_type == OrderType::Ecommerce;

    let orders = validated
        .into_iter()
        .filter_map(|(draft, (quantity, unit_price))| {
            let product = draft.product.as_ref()?;
            let sku = catalog
                .iter()
                .find(|p| p.id == product.id)
                .map(|p| p.sku.clone())
                .unwrap_or_default();

            let mut order = Order {
                id: id_gen(),
                store_id: store_id.to_string(),
                order_type: order_type.code().to_string(),
                customer_name: draft.field(FormField::CustomerName).trim().to_string(),
                customer_phone: draft.field(FormField::CustomerPhone).trim().to_string(),
                address: draft.field(FormField::Address).trim().to_string(),
                platform: ecommerce
                    .then(|| non_empty(draft.field(FormField::Platform)))
                    .flatten(),
                tracking_code: ecommerce
                    .then(|| non_empty(draft.field(FormField::TrackingCode)))
                    .flatten(),
                items: vec![OrderItem {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    product_sku: sku,
                    quantity,
                    unit_price,
                }],
                total_amount: 0.0,
                payment_status: PaymentStatus::Unpaid,
                note: if order_type == OrderType::Wholesale {
                    draft.field(FormField::Note).trim().to_string()
                } else {
                    String::new()
                },
                created_at: created_at.clone(),
            };
            order.recalculate_total();
            Some(order)
        })
        .collect();

    Ok(orders)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitSummary {
    pub created: usize,
    /// Позиции записанных заказов во входном срезе (= позиции форм)
    pub saved: Vec<usize>,
    /// id заказов, которые не удалось записать
    pub failed: Vec<String>,
    pub transactions: FanOutSummary,
}

impl SubmitSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.created > 0
    }

    pub fn message(&self) -> String {
        if self.is_success() {
            format!("Đã tạo {} đơn hàng", self.created)
        } else {
            "Lỗi khi tạo đơn hàng".to_string()
        }
    }

    /// Виджеты форм, чьи заказы уже записаны. `instances` идут в том же
    /// порядке, что и заказы, переданные в `submit_orders`.
    pub fn saved_instances(&self, instances: &[WidgetInstance]) -> Vec<WidgetInstance> {
        self.saved
            .iter()
            .filter_map(|&position| instances.get(position).copied())
            .collect()
    }
}

/// Записать заказы по одному; после каждого успешного заказа пишутся его проводки.
/// Ошибка одного заказа не останавливает остальные.
pub async fn submit_orders<S>(store: &S, orders: &[Order], now: DateTime<Utc>) -> SubmitSummary
where
    S: RemoteStore + ?Sized,
{
    let mut summary = SubmitSummary::default();

    for (position, order) in orders.iter().enumerate() {
        let path = paths::store_order(&order.store_id, &order.id);
        match put_typed(store, &path, order).await {
            Ok(()) => {
                summary.created += 1;
                summary.saved.push(position);
                summary.transactions += log_order_transactions(store, order, now).await;
            }
            Err(e) => {
                log::error!("Lỗi khi tạo đơn hàng {}: {}", order.id, e);
                summary.failed.push(order.id.clone());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::ui::entry::form_set::FormSet;
    use crate::shared::firebase::memory::MemoryStore;
    use chrono::TimeZone;
    use contracts::domain::a001_product::ProductOption;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 3, 30, 0).unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: "p1".into(),
            name: "Táo".into(),
            sku: "TAO-01".into(),
            price: 50_000.0,
            ..Default::default()
        }]
    }

    fn filled_set(count: usize) -> FormSet {
        let mut set = FormSet::new(10);
        set.regenerate(count);
        for index in 1..=count {
            set.set_field(index, FormField::CustomerName, format!("Khách {}", index));
            set.set_field(index, FormField::Platform, "Shopee".into());
            set.set_field(index, FormField::TrackingCode, format!("SPX{}", index));
            set.set_product(
                index,
                Some(ProductOption {
                    id: "p1".into(),
                    name: "Táo".into(),
                    price: 50_000.0,
                }),
            );
            set.set_field(index, FormField::Quantity, "2".into());
        }
        set
    }

    fn sequential_ids() -> impl FnMut() -> String {
        let mut n = 0;
        move || {
            n += 1;
            format!("o{}", n)
        }
    }

    #[test]
    fn test_build_ecommerce_orders() {
        let set = filled_set(2);
        let mut ids = sequential_ids();
        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Ecommerce, "s1", now(), &mut ids)
                .unwrap();

        assert_eq!(orders.len(), 2);
        let first = &orders[0];
        assert_eq!(first.id, "o1");
        assert_eq!(first.order_type, "tmdt");
        assert_eq!(first.platform.as_deref(), Some("Shopee"));
        assert_eq!(first.tracking_code.as_deref(), Some("SPX1"));
        assert_eq!(first.items[0].product_sku, "TAO-01");
        assert_eq!(first.total_amount, 100_000.0);
        assert_eq!(first.created_at, "2024-05-01T03:30:00.000Z");
        assert_eq!(first.payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_retail_orders_drop_ecommerce_fields() {
        let set = filled_set(1);
        let mut ids = sequential_ids();
        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Retail, "s1", now(), &mut ids)
                .unwrap();
        assert_eq!(orders[0].order_type, "retail");
        assert_eq!(orders[0].platform, None);
        assert_eq!(orders[0].tracking_code, None);
    }

    #[test]
    fn test_every_invalid_form_is_reported() {
        let mut set = filled_set(3);
        set.set_field(1, FormField::CustomerName, "  ".into());
        set.set_field(3, FormField::Quantity, "0".into());
        let mut ids = sequential_ids();

        let errors =
            build_orders(set.forms(), &catalog(), OrderType::Ecommerce, "s1", now(), &mut ids)
                .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].index, 1);
        assert_eq!(errors[1].index, 3);
        assert_eq!(
            errors[1].to_string(),
            "Đơn hàng #3: Số lượng phải là số nguyên dương"
        );
    }

    #[test]
    fn test_ecommerce_requires_platform_and_product() {
        let mut set = filled_set(2);
        set.set_field(1, FormField::Platform, String::new());
        set.set_product(2, None);
        let mut ids = sequential_ids();

        let errors =
            build_orders(set.forms(), &catalog(), OrderType::Ecommerce, "s1", now(), &mut ids)
                .unwrap_err();
        assert_eq!(errors[0].message, "Vui lòng chọn sàn TMĐT");
        assert_eq!(errors[1].message, "Vui lòng chọn sản phẩm");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut set = filled_set(1);
        set.set_field(1, FormField::UnitPrice, "-5".into());
        let mut ids = sequential_ids();
        let errors =
            build_orders(set.forms(), &catalog(), OrderType::Wholesale, "s1", now(), &mut ids)
                .unwrap_err();
        assert_eq!(errors[0].message, "Đơn giá không hợp lệ");
    }

    #[tokio::test]
    async fn test_submit_writes_orders_and_transactions() {
        let store = MemoryStore::new();
        let set = filled_set(2);
        let mut ids = sequential_ids();
        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Ecommerce, "s1", now(), &mut ids)
                .unwrap();

        let summary = submit_orders(&store, &orders, now()).await;

        assert!(summary.is_success());
        assert_eq!(summary.message(), "Đã tạo 2 đơn hàng");
        assert_eq!(summary.transactions.attempted, 2);
        assert_eq!(summary.transactions.failures, 0);
        let saved = store.value_at(&paths::store_order("s1", "o2")).unwrap();
        assert_eq!(saved["customerName"], "Khách 2");
    }

    #[tokio::test]
    async fn test_failed_order_is_skipped_and_reported() {
        let store = MemoryStore::new();
        let set = filled_set(2);
        let mut ids = sequential_ids();
        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Retail, "s1", now(), &mut ids)
                .unwrap();
        store.fail_path(&paths::store_order("s1", "o1"));

        let summary = submit_orders(&store, &orders, now()).await;

        assert_eq!(summary.created, 1);
        assert_eq!(summary.failed, vec!["o1".to_string()]);
        assert_eq!(summary.message(), "Lỗi khi tạo đơn hàng");
        // no transactions for the order that was never written
        assert_eq!(summary.transactions.attempted, 1);
        assert!(store.value_at(&paths::store_order("s1", "o2")).is_some());
    }

    #[tokio::test]
    async fn test_resubmit_after_partial_failure_writes_each_order_once() {
        let store = MemoryStore::new();
        let mut set = filled_set(2);
        set.set_field(1, FormField::CustomerName, "K1".into());
        set.set_field(2, FormField::CustomerName, "K2".into());
        let mut ids = sequential_ids();
        store.fail_path(&paths::store_order("s1", "o1"));

        let instances: Vec<WidgetInstance> = set.forms().iter().map(|f| f.instance).collect();
        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Retail, "s1", now(), &mut ids)
                .unwrap();
        let first = submit_orders(&store, &orders, now()).await;
        assert!(!first.is_success());
        assert_eq!(first.saved, vec![1]);
        set.remove_instances(&first.saved_instances(&instances));
        assert_eq!(set.len(), 1);

        let orders =
            build_orders(set.forms(), &catalog(), OrderType::Retail, "s1", now(), &mut ids)
                .unwrap();
        let second = submit_orders(&store, &orders, now()).await;
        assert!(second.is_success());

        let saved = store.value_at(&paths::store_orders("s1")).unwrap();
        let mut names: Vec<&str> = saved
            .as_object()
            .unwrap()
            .values()
            .map(|o| o["customerName"].as_str().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["K1", "K2"]);
    }
}
