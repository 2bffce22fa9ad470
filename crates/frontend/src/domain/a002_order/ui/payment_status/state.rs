use contracts::domain::a002_order::{Order, PaymentStatus};

/// `None` = все статусы
pub fn filter_by_status(orders: &[Order], status: Option<PaymentStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.map_or(true, |s| o.payment_status == s))
        .cloned()
        .collect()
}

/// Оптимистично поменять статус в локальном списке.
/// Возвращает прежний статус для отката; `None`, если заказа нет.
pub fn apply_status(
    orders: &mut [Order],
    order_id: &str,
    status: PaymentStatus,
) -> Option<PaymentStatus> {
    let order = orders.iter_mut().find(|o| o.id == order_id)?;
    Some(std::mem::replace(&mut order.payment_status, status))
}

/// Значение select фильтра: пустая строка = все
pub fn status_filter_from_code(code: &str) -> Option<PaymentStatus> {
    PaymentStatus::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: PaymentStatus) -> Order {
        Order {
            id: id.into(),
            payment_status: status,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("o1", PaymentStatus::Unpaid),
            order("o2", PaymentStatus::Paid),
            order("o3", PaymentStatus::Unpaid),
        ]
    }

    #[test]
    fn test_filter_keeps_order() {
        let orders = sample();
        let unpaid = filter_by_status(&orders, Some(PaymentStatus::Unpaid));
        let ids: Vec<&str> = unpaid.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3"]);

        assert_eq!(filter_by_status(&orders, None).len(), 3);
        assert!(filter_by_status(&orders, Some(PaymentStatus::Partial)).is_empty());
    }

    #[test]
    fn test_apply_and_revert_status() {
        let mut orders = sample();
        let prev = apply_status(&mut orders, "o1", PaymentStatus::Paid);
        assert_eq!(prev, Some(PaymentStatus::Unpaid));
        assert_eq!(orders[0].payment_status, PaymentStatus::Paid);

        // откат после ошибки записи
        apply_status(&mut orders, "o1", PaymentStatus::Unpaid);
        assert_eq!(orders[0].payment_status, PaymentStatus::Unpaid);

        assert_eq!(apply_status(&mut orders, "missing", PaymentStatus::Paid), None);
    }

    #[test]
    fn test_filter_code() {
        assert_eq!(status_filter_from_code("partial"), Some(PaymentStatus::Partial));
        assert_eq!(status_filter_from_code(""), None);
    }
}
