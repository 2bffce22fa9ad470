use super::form_set::{FormField, WidgetInstance};
use super::state::OrderEntryState;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::number_format::format_vnd;
use crate::shared::searchable_select::SearchableSelect;
use contracts::domain::a001_product::ProductOption;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;

pub const PLATFORMS: [&str; 5] = ["Shopee", "Lazada", "TikTok Shop", "Tiki", "Khác"];

/// Текущее значение поля формы по ключу виджета
fn field_value(state: OrderEntryState, instance: WidgetInstance, field: FormField) -> String {
    state.forms.with(|f| {
        f.index_of(instance)
            .and_then(|i| f.get(i))
            .map(|d| d.field(field).to_string())
            .unwrap_or_default()
    })
}

fn write_field(state: OrderEntryState, instance: WidgetInstance, field: FormField, value: String) {
    state.forms.update(|f| {
        if let Some(index) = f.index_of(instance) {
            f.set_field(index, field, value);
        }
    });
}

#[component]
fn FieldInput(
    state: OrderEntryState,
    instance: WidgetInstance,
    index: usize,
    field: FormField,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let id = super::form_set::field_id(field, index);
    view! {
        <div class="order-form__field">
            <label for=id.clone()>{field.label()}</label>
            <input
                id=id
                name=field.dom_name()
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or("")
                prop:value=move || field_value(state, instance, field)
                on:input=move |ev| write_field(state, instance, field, event_target_value(&ev))
            />
        </div>
    }
}

/// Одна форма заказа: клиент, товар, количество, цена.
#[component]
pub fn OrderFormCard(
    state: OrderEntryState,
    instance: WidgetInstance,
    index: usize,
    /// id товара, выбранного до пересоздания виджета (импорт)
    initial_product: Option<String>,
    delete_transition_ms: u32,
) -> impl IntoView {
    let notify = use_notifications();
    let layout = Memo::new(move |_| state.mode.with(|m| m.layout()));
    let leaving = move || state.leaving.with(|l| l.contains(&instance));

    let on_select = Callback::new(move |item: ProductOption| {
        state.forms.update(|f| {
            if let Some(i) = f.index_of(instance) {
                f.set_product(i, Some(item));
            }
        });
    });

    let line_total = move || {
        state.forms.with(|f| {
            f.index_of(instance)
                .and_then(|i| f.get(i))
                .map(|d| d.line_total())
                .unwrap_or(0.0)
        })
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(current) = state.forms.with_untracked(|f| f.index_of(instance)) else {
            return;
        };
        if let Err(e) = state.forms.with_untracked(|f| f.check_delete(current)) {
            notify.warning(e.to_string());
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Xóa đơn hàng #{}?", current))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        state.leaving.update(|l| l.push(instance));
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delete_transition_ms).await;
            // индекс мог сдвинуться, пока шла анимация
            let removed = state
                .forms
                .try_update(|f| f.index_of(instance).map(|i| f.remove(i)))
                .flatten();
            match removed {
                Some(Ok(draft)) => log!("🗑️ Removed order form #{}", draft.index),
                Some(Err(e)) => notify.warning(e.to_string()),
                None => {}
            }
            state.leaving.update(|l| l.retain(|i| *i != instance));
            state.sync_count();
        });
    };

    view! {
        <div
            class="order-form"
            class:order-form--leaving=leaving
            id=super::form_set::form_id(index)
        >
            <div class="order-form__header">
                <span class="order-form__title">{format!("Đơn hàng #{}", index)}</span>
                <button
                    class="button button--ghost order-form__delete"
                    title="Xóa đơn hàng"
                    on:click=on_delete
                >
                    {icon("trash")}
                </button>
            </div>

            <div class="order-form__grid">
                <FieldInput state=state instance=instance index=index field=FormField::CustomerName />
                <FieldInput
                    state=state
                    instance=instance
                    index=index
                    field=FormField::CustomerPhone
                    input_type="tel"
                />
                <FieldInput state=state instance=instance index=index field=FormField::Address />

                <Show when=move || layout.get().ecommerce_fields>
                    <div class="order-form__field">
                        <label for=super::form_set::field_id(FormField::Platform, index)>
                            {FormField::Platform.label()}
                        </label>
                        <select
                            id=super::form_set::field_id(FormField::Platform, index)
                            name=FormField::Platform.dom_name()
                            prop:value=move || field_value(state, instance, FormField::Platform)
                            on:change=move |ev| {
                                write_field(state, instance, FormField::Platform, event_target_value(&ev))
                            }
                        >
                            <option value="">"-- Chọn sàn --"</option>
                            {PLATFORMS
                                .iter()
                                .map(|p| view! { <option value=*p>{*p}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <FieldInput
                        state=state
                        instance=instance
                        index=index
                        field=FormField::TrackingCode
                    />
                </Show>

                <div class="order-form__field order-form__field--wide">
                    <label>"Sản phẩm"</label>
                    <SearchableSelect
                        items=state.product_options()
                        initial_value=initial_product
                        id=format!("product_{}", index)
                        on_select=on_select
                    />
                </div>

                <FieldInput
                    state=state
                    instance=instance
                    index=index
                    field=FormField::Quantity
                    input_type="number"
                />
                <FieldInput
                    state=state
                    instance=instance
                    index=index
                    field=FormField::UnitPrice
                    input_type="number"
                />

                <Show when=move || layout.get().wholesale_fields>
                    <FieldInput
                        state=state
                        instance=instance
                        index=index
                        field=FormField::Note
                        placeholder="Ghi chú cho đơn sỉ"
                    />
                </Show>
            </div>

            <div class="order-form__footer">
                "Thành tiền: " <strong>{move || format_vnd(line_total())}</strong>
            </div>
        </div>
    }
}
