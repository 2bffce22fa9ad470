//! Tab labels - единственный источник правды для заголовков табов.

pub const TAB_ORDER_ENTRY: &str = "a002_order_entry";
pub const TAB_PAYMENT_STATUS: &str = "a002_order_payment_status";
pub const TAB_PRODUCT_REPORT: &str = "a001_product_report";

/// Читаемый заголовок таба. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        TAB_ORDER_ENTRY => "Tạo đơn hàng",
        TAB_PAYMENT_STATUS => "Trạng thái thanh toán",
        TAB_PRODUCT_REPORT => "Báo cáo sản phẩm",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in [TAB_ORDER_ENTRY, TAB_PAYMENT_STATUS, TAB_PRODUCT_REPORT] {
            assert!(!tab_label_for_key(key).is_empty());
        }
        assert_eq!(tab_label_for_key("nope"), "");
    }
}
