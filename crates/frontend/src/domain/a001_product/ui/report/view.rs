use super::state::{build_report_rows, create_state, filter_rows, paginate, ReportRow};
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a003_warehouse_transaction::api::fetch_store_transactions;
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::firebase::use_remote_store;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_number, format_vnd};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Báo cáo sản phẩm: каталог магазина с объёмом продаж по складским проводкам
#[component]
#[allow(non_snake_case)]
pub fn ProductReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_app_config();
    let remote = StoredValue::new(use_remote_store());

    let state = create_state(config.ui.report_page_size);
    let rows = RwSignal::new(Vec::<ReportRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_query = RwSignal::new(String::new());

    let load = move || {
        let Some(store_id) = ctx.store_id.get_untracked() else {
            rows.set(Vec::new());
            return;
        };
        let remote = remote.get_value();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let products = fetch_products(&remote, &store_id).await;
            let transactions = fetch_store_transactions(&remote, &store_id).await;
            match (products, transactions) {
                (Ok(products), Ok(transactions)) => {
                    log!(
                        "📊 Report: {} products, {} transactions",
                        products.len(),
                        transactions.len()
                    );
                    rows.set(build_report_rows(&products, &transactions));
                    set_error.set(None);
                    state.update(|s| s.is_loaded = true);
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        ctx.store_id.track();
        state.update(|s| s.page = 0);
        load();
    });

    // поиск всегда возвращает на первую страницу
    Effect::new(move |_| {
        let q = search_query.get();
        state.update(|s| {
            if s.query != q {
                s.query = q;
                s.page = 0;
            }
        });
    });

    let slice = Memo::new(move |_| {
        let (query, page, page_size) = state.with(|s| (s.query.clone(), s.page, s.page_size));
        rows.with(|all| paginate(&filter_rows(all, &query), page, page_size))
    });

    let go_to_page = move |page: usize| state.update(|s| s.page = page);
    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        })
    };

    view! {
        <PageFrame page_id="a001_product--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("report")}
                    <h1 class="page__title">"Báo cáo sản phẩm"</h1>
                </div>
                <div class="page__header-right">
                    <div style="width: 280px;">
                        <Input value=search_query placeholder="Tìm theo tên hoặc SKU..." />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <PaginationControls
                    current_page=Signal::derive(move || slice.with(|s| s.page))
                    total_pages=Signal::derive(move || slice.with(|s| s.total_pages))
                    total_count=Signal::derive(move || slice.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=120.0>"SKU"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Sản phẩm"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Giá bán"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Tồn kho"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Đã bán"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Doanh thu"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || slice.get().items
                                key=|row| row.product_id.clone()
                                children=move |row: ReportRow| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.sku}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_vnd(row.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.stock.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_number(row.sold_quantity as f64, 0)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_vnd(row.sold_value)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded) && slice.with(|s| s.total_count == 0)>
                    <div class="page__empty">"Không có sản phẩm"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
