use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::logging::log;
use leptos::prelude::*;

/// Полоса табов и контент открытых табов
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        let key_for_active = tab.key.clone();
                        let key_for_click = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=move || {
                                    tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                                }
                                on:click=move |_| tabs_store.activate_tab(&key_for_click)
                            >
                                <span class="tabs__title">{tab.title.clone()}</span>
                                <button
                                    class="tabs__close"
                                    aria-label="Đóng"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <Show
                when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                fallback=|| view! { <div class="tabs__empty">"Chọn chức năng ở menu bên trái"</div> }
            >
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        log!("👶 <For> children function called for: '{}'", tab.key);
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </Show>
        </div>
    }
}
