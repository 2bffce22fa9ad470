use super::form_card::OrderFormCard;
use super::import_panel::ImportPanel;
use super::mode::LazyInit;
use super::state::OrderEntryState;
use super::submit::{build_orders, submit_orders};
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a002_order::api::new_order_id;
use crate::layout::global_context::use_app_context;
use crate::shared::config::use_app_config;
use crate::shared::date_utils::now_utc;
use crate::shared::firebase::use_remote_store;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_ENTRY};
use contracts::domain::a002_order::{CreationMethod, OrderType};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Страница «Tạo đơn hàng»
#[component]
#[allow(non_snake_case)]
pub fn OrderEntryPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_app_config();
    let remote = StoredValue::new(use_remote_store());
    let notify = use_notifications();

    let state = OrderEntryState::new(config.ui.max_order_forms);
    let delete_transition_ms = config.ui.delete_transition_ms;
    let loading_products = RwSignal::new(false);

    // каталог перечитывается при смене магазина
    Effect::new(move |_| {
        let Some(store_id) = ctx.store_id.get() else {
            state.products.set(Vec::new());
            return;
        };
        let remote = remote.get_value();
        loading_products.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products(&remote, &store_id).await {
                Ok(list) => {
                    log!("📦 Loaded {} products for store {}", list.len(), store_id);
                    state.products.set(list);
                }
                Err(e) => notify.error(e),
            }
            loading_products.set(false);
        });
    });

    let layout = Memo::new(move |_| state.mode.with(|m| m.layout()));
    let total = Memo::new(move |_| state.forms.with(|f| f.total_amount()));

    let on_add = move |_: leptos::ev::MouseEvent| {
        match state.forms.try_update(|f| f.add_form()) {
            Some(Ok(_)) => state.sync_count(),
            Some(Err(e)) => notify.warning(e.to_string()),
            None => {}
        }
    };

    let on_regenerate = move |_: leptos::ev::MouseEvent| state.reset_forms();

    let on_submit = move |_: leptos::ev::MouseEvent| {
        if state.submitting.get_untracked() {
            return;
        }
        let Some(store_id) = ctx.store_id.get_untracked() else {
            notify.warning("Vui lòng chọn cửa hàng");
            return;
        };
        let order_type = state.mode.with_untracked(|m| m.order_type);
        let now = now_utc();
        let (built, instances) = state.forms.with_untracked(|f| {
            let built = state.products.with_untracked(|catalog| {
                build_orders(f.forms(), catalog, order_type, &store_id, now, &mut new_order_id)
            });
            (built, f.forms().iter().map(|d| d.instance).collect::<Vec<_>>())
        });
        let orders = match built {
            Ok(orders) => orders,
            Err(errors) => {
                for e in errors {
                    notify.warning(e.to_string());
                }
                return;
            }
        };

        let remote = remote.get_value();
        state.submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let summary = submit_orders(&remote, &orders, now).await;
            log!(
                "🧾 Orders: created={}, failed={}, transactions={:?}",
                summary.created,
                summary.failed.len(),
                summary.transactions
            );
            if summary.is_success() {
                notify.success(summary.message());
                state.count_input.set("1".to_string());
                state.reset_forms();
            } else {
                // записанные заказы не должны уйти повторно
                let saved = summary.saved_instances(&instances);
                if !saved.is_empty() {
                    state.forms.update(|f| {
                        f.remove_instances(&saved);
                    });
                    state.sync_count();
                }
                notify.error(summary.message());
            }
            state.submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="a002_order--entry" category=PAGE_CAT_ENTRY>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("plus")}
                    <h1 class="page__title">"Tạo đơn hàng"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || loading_products.get()>
                        <Spinner />
                    </Show>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || format!("{} sản phẩm", state.products.with(|p| p.len()))}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || ctx.store_id.get().is_some()
                    fallback=|| view! { <div class="page__empty">"Vui lòng chọn cửa hàng ở thanh trên"</div> }
                >
                    <div class="order-entry__types">
                        <Flex gap=FlexGap::Small>
                            {OrderType::ALL
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <Button
                                            appearance=move || {
                                                if state.mode.with(|m| m.is_active_type(t)) {
                                                    ButtonAppearance::Primary
                                                } else {
                                                    ButtonAppearance::Secondary
                                                }
                                            }
                                            on_click=move |_| state.select_order_type(t)
                                        >
                                            {t.button_title()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </Flex>
                    </div>

                    <Show when=move || layout.get().method_selector>
                        <div class="order-entry__methods">
                            <Flex gap=FlexGap::Small>
                                {CreationMethod::ALL
                                    .into_iter()
                                    .map(|m| {
                                        view! {
                                            <Button
                                                appearance=move || {
                                                    if state.mode.with(|s| s.is_active_method(m)) {
                                                        ButtonAppearance::Primary
                                                    } else {
                                                        ButtonAppearance::Secondary
                                                    }
                                                }
                                                on_click=move |_| {
                                                    if let Some(init) = state.select_creation_method(m) {
                                                        log!("⚙️ First use of {:?}", init);
                                                    }
                                                }
                                            >
                                                {m.title()}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </Flex>
                        </div>
                    </Show>

                    // обработчики импорта монтируются при первом выборе способа
                    <Show when=move || state.mode.with(|m| m.initialized_pdf)>
                        <div class="order-entry__group" class:hidden=move || !layout.get().pdf_group>
                            <ImportPanel state=state kind=LazyInit::Pdf />
                        </div>
                    </Show>
                    <Show when=move || state.mode.with(|m| m.initialized_excel)>
                        <div class="order-entry__group" class:hidden=move || !layout.get().excel_group>
                            <ImportPanel state=state kind=LazyInit::Excel />
                        </div>
                    </Show>

                    <div class="order-entry__group" class:hidden=move || !layout.get().manual_group>
                        <div class="order-entry__toolbar">
                            <Flex gap=FlexGap::Small>
                                <Label>"Số lượng đơn"</Label>
                                <div style="width: 100px;">
                                    <Input input_type=InputType::Number value=state.count_input />
                                </div>
                                <Button appearance=ButtonAppearance::Secondary on_click=on_regenerate>
                                    "Tạo biểu mẫu"
                                </Button>
                                <Button appearance=ButtonAppearance::Secondary on_click=on_add>
                                    {icon("plus")}
                                    "Thêm đơn"
                                </Button>
                            </Flex>
                        </div>

                        <div class="order-entry__forms">
                            <For
                                each=move || state.forms.with(|f| {
                                    f.forms()
                                        .iter()
                                        .map(|d| (d.instance, d.index, d.product.as_ref().map(|p| p.id.clone())))
                                        .collect::<Vec<_>>()
                                })
                                key=|(instance, _, _)| *instance
                                children=move |(instance, index, product)| {
                                    view! {
                                        <OrderFormCard
                                            state=state
                                            instance=instance
                                            index=index
                                            initial_product=product
                                            delete_transition_ms=delete_transition_ms
                                        />
                                    }
                                }
                            />
                        </div>

                        <div class="order-entry__footer">
                            <div class="order-entry__total">
                                {move || format!("Tổng: {} đơn hàng", state.forms.with(|f| f.len()))}
                                " | "
                                <strong>{move || format_vnd(total.get())}</strong>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_submit
                                disabled=Signal::derive(move || state.submitting.get())
                            >
                                {move || if state.submitting.get() { "Đang lưu..." } else { "Tạo đơn hàng" }}
                            </Button>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
