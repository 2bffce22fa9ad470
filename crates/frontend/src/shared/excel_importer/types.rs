use serde::Serialize;
use std::collections::HashMap;

/// Определение колонки для импорта
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnDef {
    /// Техническое имя поля
    pub field_name: &'static str,
    /// Заголовок в файле
    pub title: &'static str,
    pub data_type: DataType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    String,
    Number,
}

/// Лист заказов: одна строка = одна позиция заказа
pub const ORDER_IMPORT_COLUMNS: &[ColumnDef] = &[
    ColumnDef { field_name: "customerName", title: "Tên khách hàng", data_type: DataType::String },
    ColumnDef { field_name: "customerPhone", title: "Số điện thoại", data_type: DataType::String },
    ColumnDef { field_name: "address", title: "Địa chỉ", data_type: DataType::String },
    ColumnDef { field_name: "sku", title: "SKU", data_type: DataType::String },
    ColumnDef { field_name: "quantity", title: "Số lượng", data_type: DataType::Number },
    ColumnDef { field_name: "unitPrice", title: "Đơn giá", data_type: DataType::Number },
    ColumnDef { field_name: "platform", title: "Sàn", data_type: DataType::String },
    ColumnDef { field_name: "trackingCode", title: "Mã vận đơn", data_type: DataType::String },
];

/// Статус сопоставления колонки
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMapping {
    pub expected: String,
    /// Найденный заголовок в файле
    pub found: Option<String>,
    pub file_index: Option<usize>,
}

/// Результат разбора листа
#[derive(Debug, Clone, Serialize)]
pub struct ExcelData {
    pub file_name: String,
    /// Строки данных (field_name -> значение)
    pub rows: Vec<HashMap<String, String>>,
    pub column_mapping: Vec<ColumnMapping>,
    pub file_headers: Vec<String>,
}

impl ExcelData {
    /// Первая строка сырых данных считается заголовком
    pub fn from_raw(
        raw_data: Vec<Vec<String>>,
        columns: &[ColumnDef],
        file_name: String,
    ) -> Result<Self, String> {
        let Some(headers) = raw_data.first() else {
            return Err("Tệp trống".to_string());
        };

        let file_headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let lowered: Vec<String> = file_headers.iter().map(|h| h.to_lowercase()).collect();

        let column_mapping: Vec<ColumnMapping> = columns
            .iter()
            .map(|col| {
                let title = col.title.trim().to_lowercase();
                let index = lowered.iter().position(|h| *h == title).or_else(|| {
                    lowered
                        .iter()
                        .position(|h| !h.is_empty() && (h.contains(&title) || title.contains(h.as_str())))
                });
                ColumnMapping {
                    expected: col.title.to_string(),
                    found: index.map(|i| file_headers[i].clone()),
                    file_index: index,
                }
            })
            .collect();

        let rows = raw_data
            .iter()
            .skip(1)
            .map(|row| {
                columns
                    .iter()
                    .zip(column_mapping.iter())
                    .map(|(col, mapping)| {
                        let value = mapping
                            .file_index
                            .and_then(|i| row.get(i))
                            .map(|v| v.trim().to_string())
                            .unwrap_or_default();
                        (col.field_name.to_string(), value)
                    })
                    .collect::<HashMap<_, _>>()
            })
            // Пустые строки пропускаем
            .filter(|row| row.values().any(|v| !v.is_empty()))
            .collect();

        Ok(ExcelData {
            file_name,
            rows,
            column_mapping,
            file_headers,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn unmapped_columns(&self) -> Vec<&str> {
        self.column_mapping
            .iter()
            .filter(|m| m.found.is_none())
            .map(|m| m.expected.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn maps_headers_case_insensitively() {
        let data = ExcelData::from_raw(
            raw(&[
                &["tên khách hàng", "sku", "SỐ LƯỢNG"],
                &["An", "SP01", "2"],
            ]),
            ORDER_IMPORT_COLUMNS,
            "orders.xlsx".into(),
        )
        .unwrap();

        assert_eq!(data.row_count(), 1);
        assert_eq!(data.rows[0]["customerName"], "An");
        assert_eq!(data.rows[0]["sku"], "SP01");
        assert_eq!(data.rows[0]["quantity"], "2");
        assert_eq!(data.rows[0]["platform"], "");
        assert!(data.unmapped_columns().contains(&"Sàn"));
    }

    #[test]
    fn falls_back_to_substring_match() {
        let data = ExcelData::from_raw(
            raw(&[&["Mã SKU sản phẩm"], &["SP09"]]),
            ORDER_IMPORT_COLUMNS,
            "x.xlsx".into(),
        )
        .unwrap();
        assert_eq!(data.rows[0]["sku"], "SP09");
    }

    #[test]
    fn skips_blank_rows_and_rejects_empty_file() {
        let data = ExcelData::from_raw(
            raw(&[&["SKU", "Số lượng"], &["", " "], &["SP01", "1"]]),
            ORDER_IMPORT_COLUMNS,
            "x.xlsx".into(),
        )
        .unwrap();
        assert_eq!(data.row_count(), 1);

        assert!(ExcelData::from_raw(Vec::new(), ORDER_IMPORT_COLUMNS, "e.xlsx".into()).is_err());
    }
}
