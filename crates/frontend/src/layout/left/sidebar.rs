//! Боковое меню со сворачиваемыми группами

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{
    tab_label_for_key, TAB_ORDER_ENTRY, TAB_PAYMENT_STATUS, TAB_PRODUCT_REPORT,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "orders",
            label: "Đơn hàng",
            icon: "orders",
            items: vec![(TAB_ORDER_ENTRY, "plus"), (TAB_PAYMENT_STATUS, "payments")],
        },
        MenuGroup {
            id: "reports",
            label: "Báo cáo",
            icon: "report",
            items: vec![(TAB_PRODUCT_REPORT, "report")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(vec!["orders", "reports"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.contains(&group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
