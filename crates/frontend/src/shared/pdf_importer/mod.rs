//! Импорт заказов из PDF с транспортными этикетками.
//!
//! Текст извлекается в браузере через pdf.js (`extractPdfText`),
//! разбор этикеток выполняется здесь.

pub mod labels;

pub use labels::{parse_shipping_labels, LabelLine, ShippingLabel};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = extractPdfText, catch)]
    async fn extract_pdf_text_js(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Возвращает весь текст документа, страницы разделены переводом строки
pub async fn extract_pdf_text(file: web_sys::File) -> Result<String, String> {
    let bytes = crate::shared::excel_importer::parser::read_file_bytes(&file).await?;
    let text = extract_pdf_text_js(&bytes)
        .await
        .map_err(|e| format!("Lỗi đọc tệp PDF: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "Không trích xuất được văn bản từ PDF".to_string())
}
