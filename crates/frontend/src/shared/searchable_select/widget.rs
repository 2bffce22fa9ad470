use super::state::{DropdownRow, SearchableSelectConfig, SearchableSelectState};
use crate::shared::number_format::format_vnd;
use contracts::domain::a001_product::ProductOption;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Выпадающий список товаров с поиском.
///
/// Каждый экземпляр владеет своим состоянием и сам закрывается по клику
/// вне своего контейнера; другие открытые экземпляры это не затрагивает.
#[component]
pub fn SearchableSelect(
    /// Кандидаты. Каждое изменение заново вызывает `set_data`.
    #[prop(into)]
    items: Signal<Vec<ProductOption>>,
    /// Тексты (placeholder, поиск, «ничего не найдено»)
    #[prop(optional)]
    config: Option<SearchableSelectConfig>,
    /// id товара, который нужно выбрать после первой загрузки данных
    #[prop(default = None)]
    initial_value: Option<String>,
    /// HTML id поля ввода
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Вызывается при выборе товара
    #[prop(optional)]
    on_select: Option<Callback<ProductOption>>,
) -> impl IntoView {
    let state = RwSignal::new(SearchableSelectState::new(config.unwrap_or_default()));
    let pending_initial = StoredValue::new(initial_value);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let data = items.get();
        state.update(|s| {
            s.set_data(data);
            if let Some(id) = pending_initial.get_value() {
                if s.set_value(&id).is_some() {
                    pending_initial.set_value(None);
                }
            }
        });
    });

    let handle = window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        if !state.with_untracked(|s| s.is_open()) {
            return;
        }
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| container.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            state.update(|s| s.close());
        }
    });
    on_cleanup(move || handle.remove());

    let choose = move |item: ProductOption| {
        state.update(|s| s.select_item(item.clone()));
        if let Some(cb) = on_select {
            cb.run(item);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let outcome = state
            .try_update(|s| s.handle_key(&ev.key()))
            .unwrap_or_default();
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if let (Some(item), Some(cb)) = (outcome.selected, on_select) {
            cb.run(item);
        }
    };

    view! {
        <div class="searchable-select" class:searchable-select--open=move || state.with(|s| s.is_open()) node_ref=container_ref>
            <input
                type="text"
                class="searchable-select__input"
                id=move || id.get().unwrap_or_default()
                autocomplete="off"
                placeholder=move || state.with(|s| s.input_placeholder().to_string())
                prop:value=move || state.with(|s| s.input_value())
                on:focus=move |_| {
                    if !state.with_untracked(|s| s.is_open()) {
                        state.update(|s| s.open());
                    }
                }
                on:click=move |_| {
                    if !state.with_untracked(|s| s.is_open()) {
                        state.update(|s| s.open());
                    }
                }
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.filter(&text));
                }
                on:keydown=on_keydown
            />
            <span class="searchable-select__arrow">"▾"</span>
            <Show when=move || state.with(|s| s.is_open())>
                <div class="searchable-select__dropdown">
                    {move || {
                        let highlighted = state.with(|s| s.highlighted());
                        state.with(|s| s.rows())
                            .into_iter()
                            .enumerate()
                            .map(|(pos, row)| match row {
                                DropdownRow::Item(item) => {
                                    let item_id = item.id.clone();
                                    let name = item.name.clone();
                                    let price = format_vnd(item.price);
                                    view! {
                                        <div
                                            class="searchable-select__option"
                                            class:searchable-select__option--highlighted={highlighted == Some(pos)}
                                            data-id=item_id
                                            on:click=move |_| choose(item.clone())
                                        >
                                            <span class="searchable-select__option-name">{name}</span>
                                            <span class="searchable-select__option-price">{price}</span>
                                        </div>
                                    }
                                    .into_any()
                                }
                                DropdownRow::NoResults(text) => view! {
                                    <div class="searchable-select__no-results">{text}</div>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
