use crate::domain::a004_store::api::fetch_stores;
use crate::layout::global_context::use_app_context;
use crate::shared::firebase::use_remote_store;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use contracts::domain::a004_store::Store;
use leptos::prelude::*;

/// Выбор текущего магазина в шапке. Выбор сохраняется в localStorage.
#[component]
pub fn StoreSelector() -> impl IntoView {
    let ctx = use_app_context();
    let remote = use_remote_store();
    let notify = use_notifications();
    let stores = RwSignal::new(Vec::<Store>::new());
    let loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_stores(&remote).await {
            Ok(list) => {
                // данные из localStorage могли устареть
                let selected = ctx.store_id.get_untracked();
                if let Some(store) = selected
                    .as_deref()
                    .and_then(|id| list.iter().find(|s| s.id == id))
                {
                    ctx.current_store.set(Some(store.clone()));
                }
                stores.set(list);
            }
            Err(e) => notify.error(e),
        }
        loading.set(false);
    });

    let on_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let store = stores.with_untracked(|list| list.iter().find(|s| s.id == id).cloned());
        if let Some(store) = store {
            ctx.select_store(store);
        }
    };

    view! {
        <div class="store-selector">
            {icon("store")}
            <select
                class="store-selector__select"
                disabled=move || loading.get()
                prop:value=move || {
                    stores.track();
                    ctx.store_id.get().unwrap_or_default()
                }
                on:change=on_change
            >
                <option value="" disabled=true>
                    {move || if loading.get() { "Đang tải..." } else { "Chọn cửa hàng" }}
                </option>
                <For
                    each=move || stores.get()
                    key=|s| s.id.clone()
                    children=move |s: Store| {
                        view! { <option value=s.id.clone()>{s.name.clone()}</option> }
                    }
                />
            </select>
        </div>
    }
}
