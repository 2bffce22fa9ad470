use crate::domain::a004_store::ui::StoreSelector;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let tabs_store = use_app_context();
    let store_name = move || {
        tabs_store
            .current_store
            .with(|s| s.as_ref().map(|s| s.name.clone()))
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost"
                    aria-label="Toggle Left"
                    title=move || if tabs_store.left_open.get() { "Ẩn menu" } else { "Hiện menu" }
                    on:click=move |_| tabs_store.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="header__title">"Quản lý đơn hàng"</span>
                <span class="header__subtitle">{store_name}</span>
            </div>
            <div class="header__actions">
                <StoreSelector />
            </div>
        </header>
    }
}
