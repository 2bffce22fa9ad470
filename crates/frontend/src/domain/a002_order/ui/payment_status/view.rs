use super::state::{apply_status, filter_by_status, status_filter_from_code};
use crate::domain::a002_order::api::{subscribe_orders, update_payment_status};
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::format_datetime;
use crate::shared::firebase::{use_remote_store, Subscription};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_order::{order_type_label, Order, PaymentStatus};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: PaymentStatus) -> BadgeColor {
    match status {
        PaymentStatus::Paid => BadgeColor::Success,
        PaymentStatus::Partial => BadgeColor::Warning,
        PaymentStatus::Unpaid => BadgeColor::Danger,
    }
}

/// Trạng thái thanh toán: живой список заказов текущего магазина
#[component]
#[allow(non_snake_case)]
pub fn PaymentStatusPage() -> impl IntoView {
    let ctx = use_app_context();
    let remote = StoredValue::new(use_remote_store());
    let notify = use_notifications();

    let orders = RwSignal::new(Vec::<Order>::new());
    let (loaded, set_loaded) = signal(false);
    let status_filter = RwSignal::new(String::new());
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let store_id = ctx.store_id.get();
        // старая подписка закрывается при замене
        subscription.set_value(None);
        orders.set(Vec::new());
        set_loaded.set(false);

        let Some(store_id) = store_id else {
            return;
        };
        let result = remote.with_value(|r| {
            subscribe_orders(r, &store_id, move |list| {
                log!("🔄 Orders snapshot: {}", list.len());
                orders.set(list);
                set_loaded.set(true);
            })
        });
        match result {
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(e) => notify.error(e),
        }
    });
    on_cleanup(move || subscription.set_value(None));

    let visible = Memo::new(move |_| {
        let filter = status_filter_from_code(&status_filter.get());
        orders.with(|list| filter_by_status(list, filter))
    });

    let change_status = move |order_id: String, status: PaymentStatus| {
        let Some(store_id) = ctx.store_id.get_untracked() else {
            return;
        };
        let Some(previous) = orders
            .try_update(|list| apply_status(list, &order_id, status))
            .flatten()
        else {
            return;
        };
        if previous == status {
            return;
        }

        let remote = remote.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match update_payment_status(&remote, &store_id, &order_id, status).await {
                Ok(()) => notify.success("Đã cập nhật trạng thái thanh toán"),
                Err(_) => {
                    orders.update(|list| {
                        apply_status(list, &order_id, previous);
                    });
                    notify.error("Lỗi cập nhật trạng thái thanh toán");
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("payments")}
                    <h1 class="page__title">"Trạng thái thanh toán"</h1>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Label>"Lọc:"</Label>
                        <Select value=status_filter>
                            <option value="">"Tất cả"</option>
                            {PaymentStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {move || format!("{} đơn", visible.with(|v| v.len()))}
                        </Badge>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || ctx.store_id.get().is_some()
                    fallback=|| view! { <div class="page__empty">"Vui lòng chọn cửa hàng ở thanh trên"</div> }
                >
                    <Show when=move || !loaded.get()>
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            <span>"Đang tải đơn hàng..."</span>
                        </Flex>
                    </Show>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=140.0>"Ngày tạo"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Mã đơn"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Khách hàng"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Loại"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Tổng tiền"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Thanh toán"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || visible.get()
                                    key=|o| (o.id.clone(), o.payment_status)
                                    children=move |order: Order| {
                                        let order_id = order.id.clone();
                                        let status = order.payment_status;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&order.created_at)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <code>{order.id.chars().take(8).collect::<String>()}</code>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{order.customer_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{order_type_label(&order.order_type)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_vnd(order.total_amount)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Flex gap=FlexGap::Small>
                                                            <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                                {status.label()}
                                                            </Badge>
                                                            <select
                                                                class="payment-status__select"
                                                                prop:value=status.code()
                                                                on:change=move |ev| {
                                                                    if let Some(next) = PaymentStatus::from_code(&event_target_value(&ev)) {
                                                                        change_status(order_id.clone(), next);
                                                                    }
                                                                }
                                                            >
                                                                {PaymentStatus::ALL
                                                                    .into_iter()
                                                                    .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                                                    .collect_view()}
                                                            </select>
                                                        </Flex>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <Show when=move || loaded.get() && visible.with(|v| v.is_empty())>
                        <div class="page__empty">"Không có đơn hàng"</div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
