use super::import::{from_excel, from_labels, resolve, ImportPreview};
use super::mode::LazyInit;
use super::state::OrderEntryState;
use crate::shared::excel_importer::{read_excel_from_file, ExcelData, ORDER_IMPORT_COLUMNS};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::pdf_importer::{extract_pdf_text, parse_shipping_labels};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

async fn preview_excel(file: web_sys::File, state: OrderEntryState) -> Result<ImportPreview, String> {
    let file_name = file.name();
    let raw = read_excel_from_file(file).await?;
    let data = ExcelData::from_raw(raw, ORDER_IMPORT_COLUMNS, file_name.clone())?;
    let (imported, unresolved) = from_excel(&data);
    Ok(state
        .products
        .with_untracked(|catalog| resolve(file_name, imported, unresolved, catalog)))
}

async fn preview_pdf(file: web_sys::File, state: OrderEntryState) -> Result<ImportPreview, String> {
    let file_name = file.name();
    let text = extract_pdf_text(file).await?;
    let labels = parse_shipping_labels(&text);
    if labels.is_empty() {
        return Err("Không tìm thấy vận đơn trong tệp PDF".to_string());
    }
    let (imported, unresolved) = from_labels(&labels);
    Ok(state
        .products
        .with_untracked(|catalog| resolve(file_name, imported, unresolved, catalog)))
}

/// Загрузка заказов из файла (Excel или PDF этикеток).
///
/// Монтируется только после первого выбора способа; результат
/// показывается как предпросмотр и переносится в формы по кнопке.
#[component]
pub fn ImportPanel(state: OrderEntryState, kind: LazyInit) -> impl IntoView {
    let notify = use_notifications();
    log!("📥 Import handler initialized: {:?}", kind);

    let preview = match kind {
        LazyInit::Pdf => state.pdf_preview,
        LazyInit::Excel => state.excel_preview,
    };
    let (accept, hint) = match kind {
        LazyInit::Pdf => (".pdf", "Chọn tệp PDF vận đơn"),
        LazyInit::Excel => (".xlsx,.xls,.csv", "Chọn tệp Excel đơn hàng"),
    };

    let on_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        state.importing.set(true);
        preview.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match kind {
                LazyInit::Pdf => preview_pdf(file, state).await,
                LazyInit::Excel => preview_excel(file, state).await,
            };
            match result {
                Ok(p) => {
                    log!("📄 {}", p.summary());
                    preview.set(Some(p));
                }
                Err(e) => notify.error(e),
            }
            state.importing.set(false);
        });
    };

    let on_apply = move |_: leptos::ev::MouseEvent| {
        let Some(p) = preview.get_untracked() else {
            return;
        };
        if p.resolved.is_empty() {
            notify.warning("Không có dòng hợp lệ để tạo đơn hàng");
            return;
        }
        let applied = state.apply_preview(p);
        preview.set(None);
        notify.success(format!("Đã nạp {} đơn hàng vào biểu mẫu", applied));
    };

    view! {
        <div class="import-panel">
            <label class="import-panel__picker">
                {icon("upload")}
                <span>{hint}</span>
                <input type="file" accept=accept on:change=on_file />
            </label>

            <Show when=move || state.importing.get()>
                <Flex gap=FlexGap::Small>
                    <Spinner />
                    <span>"Đang xử lý tệp..."</span>
                </Flex>
            </Show>

            {move || {
                preview
                    .get()
                    .map(|p| {
                        let has_rows = !p.resolved.is_empty();
                        let summary = p.summary();
                        let errors = p.unresolved;
                        view! {
                            <div class="import-panel__preview">
                                <div class="import-panel__summary">
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if has_rows { BadgeColor::Success } else { BadgeColor::Danger }
                                    >
                                        {summary}
                                    </Badge>
                                </div>
                                {(!errors.is_empty())
                                    .then(|| {
                                        view! {
                                            <ul class="import-panel__errors">
                                                {errors
                                                    .iter()
                                                    .map(|row| {
                                                        view! {
                                                            <li>{format!("Dòng {}: {}", row.source_row, row.reason)}</li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })}
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !has_rows)
                                    on_click=on_apply
                                >
                                    "Nạp vào biểu mẫu"
                                </Button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
