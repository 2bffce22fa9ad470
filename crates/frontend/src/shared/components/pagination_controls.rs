use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZES: &[usize] = &[10, 20, 50, 100];

/// Номер последней страницы (0-based)
fn last_page(total_pages: usize) -> usize {
    total_pages.max(1) - 1
}

/// Кнопки первая/предыдущая/следующая/последняя и выбор размера страницы
#[component]
pub fn PaginationControls(
    /// Текущая страница (0-based)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec());
    let fallback_size = sizes.first().copied().unwrap_or(20);
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() >= last_page(total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Trang đầu"
                disabled=at_start
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Trang trước"
                disabled=at_start
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Trang {} / {} ({} sản phẩm)",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Trang sau"
                disabled=at_end
                on:click=move |_| {
                    let next = (current_page.get() + 1).min(last_page(total_pages.get()));
                    on_page_change.run(next);
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Trang cuối"
                disabled=at_end
                on:click=move |_| on_page_change.run(last_page(total_pages.get()))
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
            >
                {sizes
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / trang", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
