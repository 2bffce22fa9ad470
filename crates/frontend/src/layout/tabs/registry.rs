//! Tab content registry - маппинг tab.key → View

use super::tab_labels::{TAB_ORDER_ENTRY, TAB_PAYMENT_STATUS, TAB_PRODUCT_REPORT};
use crate::domain::a001_product::ui::report::ProductReportPage;
use crate::domain::a002_order::ui::entry::OrderEntryPage;
use crate::domain::a002_order::ui::payment_status::PaymentStatusPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Контент таба по ключу; для неизвестных ключей заглушка
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        TAB_ORDER_ENTRY => view! { <OrderEntryPage /> }.into_any(),
        TAB_PAYMENT_STATUS => view! { <PaymentStatusPage /> }.into_any(),
        TAB_PRODUCT_REPORT => view! { <ProductReportPage /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">"Không tìm thấy trang"</div> }.into_any()
        }
    }
}
