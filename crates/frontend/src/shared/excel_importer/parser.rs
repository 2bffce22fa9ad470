use serde_json::Value;
use wasm_bindgen::prelude::*;

/// JS binding для парсинга Excel файлов через SheetJS
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Читает первый лист файла как массив строк
pub async fn read_excel_from_file(file: web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let bytes = read_file_bytes(&file).await?;

    let result =
        parse_excel_file(&bytes).map_err(|e| format!("Lỗi đọc tệp Excel: {:?}", e))?;

    let rows: Vec<Vec<Value>> = serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Dữ liệu Excel không hợp lệ: {}", e))?;

    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

pub(crate) async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let array_buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Lỗi đọc tệp: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => match n.as_f64() {
            // 2.0 -> "2"
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
