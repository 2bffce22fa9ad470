//! PageFrame: корневая обёртка каждой страницы внутри вкладки.
//!
//! На корневом элементе всегда есть:
//!   - `id` в формате `"{entity}--{category}"`, например `"a002_order--entry"`
//!   - `data-page-category`, одна из констант PAGE_CAT_*

use leptos::prelude::*;

/// Форма ввода / сценарий действия
pub const PAGE_CAT_ENTRY: &str = "entry";

/// Список записей с фильтрами
pub const PAGE_CAT_LIST: &str = "list";

/// Отчёт с пагинацией
pub const PAGE_CAT_REPORT: &str = "report";

pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_REPORT => "page page--report",
        PAGE_CAT_ENTRY => "page page--entry",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_page_ids() {
        assert!(is_valid_page_id("a002_order--entry"));
        assert!(!is_valid_page_id("a002_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--"));
    }
}
