//! Преобразование импортированных строк (Excel, PDF) в формы заказов.

use super::form_set::{DraftSeed, FormField};
use crate::shared::excel_importer::ExcelData;
use crate::shared::pdf_importer::ShippingLabel;
use contracts::domain::a001_product::{Product, ProductOption};
use std::collections::BTreeMap;

/// Одна позиция из файла, ещё не сопоставленная с товаром
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedOrder {
    /// Номер строки в источнике (1-based), для сообщений
    pub source_row: usize,
    pub customer_name: String,
    pub customer_phone: String,
    pub address: String,
    pub platform: Option<String>,
    pub tracking_code: Option<String>,
    /// SKU или точное название товара
    pub product_key: String,
    pub quantity: u32,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedRow {
    pub source_row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPreview {
    pub source: String,
    pub resolved: Vec<DraftSeed>,
    pub unresolved: Vec<UnresolvedRow>,
}

impl ImportPreview {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} dòng hợp lệ, {} dòng lỗi",
            self.source,
            self.resolved.len(),
            self.unresolved.len()
        )
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// "50.000", "50,000 ₫", "12.5" -> число
fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim().trim_end_matches('₫').trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(v) = raw.parse::<f64>() {
        if !raw.contains('.') || raw.split('.').nth(1).map(str::len) != Some(3) {
            return Some(v);
        }
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Строки листа Excel. Невалидные строки сразу попадают в ошибки.
pub fn from_excel(data: &ExcelData) -> (Vec<ImportedOrder>, Vec<UnresolvedRow>) {
    let mut orders = Vec::new();
    let mut errors = Vec::new();

    for (k, row) in data.rows.iter().enumerate() {
        // +1 за заголовок, +1 за 1-based
        let source_row = k + 2;
        let get = |name: &str| row.get(name).map(String::as_str).unwrap_or("");

        let quantity = match get("quantity").trim() {
            "" => 1,
            raw => match parse_amount(raw) {
                Some(q) if q >= 1.0 && q.fract() == 0.0 => q as u32,
                _ => {
                    errors.push(UnresolvedRow {
                        source_row,
                        reason: format!("Số lượng không hợp lệ: {}", raw),
                    });
                    continue;
                }
            },
        };

        orders.push(ImportedOrder {
            source_row,
            customer_name: get("customerName").trim().to_string(),
            customer_phone: get("customerPhone").trim().to_string(),
            address: get("address").trim().to_string(),
            platform: optional(get("platform")),
            tracking_code: optional(get("trackingCode")),
            product_key: get("sku").trim().to_string(),
            quantity,
            unit_price: parse_amount(get("unitPrice")),
        });
    }

    (orders, errors)
}

/// Каждая товарная строка этикетки становится отдельной позицией
pub fn from_labels(labels: &[ShippingLabel]) -> (Vec<ImportedOrder>, Vec<UnresolvedRow>) {
    let mut orders = Vec::new();
    let mut errors = Vec::new();

    for (k, label) in labels.iter().enumerate() {
        let source_row = k + 1;
        if label.lines.is_empty() {
            errors.push(UnresolvedRow {
                source_row,
                reason: format!("Vận đơn {} không có sản phẩm", label.tracking_code),
            });
            continue;
        }
        for line in &label.lines {
            orders.push(ImportedOrder {
                source_row,
                customer_name: label.recipient.clone(),
                customer_phone: label.phone.clone(),
                address: label.address.clone(),
                platform: label.platform.clone(),
                tracking_code: optional(&label.tracking_code),
                product_key: line.sku.clone(),
                quantity: line.quantity,
                unit_price: None,
            });
        }
    }

    (orders, errors)
}

/// Поиск по SKU, затем по точному названию (без учёта регистра)
pub fn find_product<'a>(catalog: &'a [Product], key: &str) -> Option<&'a Product> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|p| !p.sku.is_empty() && p.sku.to_lowercase() == key)
        .or_else(|| catalog.iter().find(|p| p.name.trim().to_lowercase() == key))
}

pub fn resolve(
    source: impl Into<String>,
    imported: Vec<ImportedOrder>,
    mut unresolved: Vec<UnresolvedRow>,
    catalog: &[Product],
) -> ImportPreview {
    let mut resolved = Vec::new();

    for row in imported {
        let Some(product) = find_product(catalog, &row.product_key) else {
            unresolved.push(UnresolvedRow {
                source_row: row.source_row,
                reason: format!("Không tìm thấy sản phẩm: {}", row.product_key),
            });
            continue;
        };

        let mut fields = BTreeMap::new();
        fields.insert(FormField::CustomerName, row.customer_name);
        fields.insert(FormField::CustomerPhone, row.customer_phone);
        fields.insert(FormField::Address, row.address);
        if let Some(platform) = row.platform {
            fields.insert(FormField::Platform, platform);
        }
        if let Some(code) = row.tracking_code {
            fields.insert(FormField::TrackingCode, code);
        }
        fields.insert(FormField::Quantity, row.quantity.to_string());
        fields.insert(
            FormField::UnitPrice,
            row.unit_price.unwrap_or(product.price).to_string(),
        );

        resolved.push(DraftSeed {
            fields,
            product: Some(ProductOption::from(product)),
        });
    }

    unresolved.sort_by_key(|r| r.source_row);
    ImportPreview {
        source: source.into(),
        resolved,
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::excel_importer::ORDER_IMPORT_COLUMNS;
    use crate::shared::pdf_importer::LabelLine;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "p1".into(),
                name: "Táo Fuji".into(),
                sku: "TAO-01".into(),
                price: 50_000.0,
                ..Default::default()
            },
            Product {
                id: "p2".into(),
                name: "Cam sành".into(),
                sku: String::new(),
                price: 30_000.0,
                ..Default::default()
            },
        ]
    }

    fn sheet(rows: &[&[&str]]) -> ExcelData {
        let raw = rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        ExcelData::from_raw(raw, ORDER_IMPORT_COLUMNS, "don.xlsx".into()).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50.000"), Some(50_000.0));
        assert_eq!(parse_amount("50,000 ₫"), Some(50_000.0));
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("3"), Some(3.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_find_product_by_sku_or_name() {
        let catalog = catalog();
        assert_eq!(find_product(&catalog, "tao-01").map(|p| p.id.as_str()), Some("p1"));
        assert_eq!(find_product(&catalog, "CAM SÀNH").map(|p| p.id.as_str()), Some("p2"));
        assert!(find_product(&catalog, "Cam").is_none());
        assert!(find_product(&catalog, " ").is_none());
    }

    #[test]
    fn test_excel_rows_resolve_into_seeds() {
        let data = sheet(&[
            &["Tên khách hàng", "SKU", "Số lượng", "Đơn giá", "Sàn"],
            &["An", "TAO-01", "2", "", "Shopee"],
            &["Bình", "Cam sành", "", "28.000", ""],
            &["Chi", "KHONG-CO", "1", "", ""],
            &["Dũng", "TAO-01", "-1", "", ""],
        ]);

        let (imported, errors) = from_excel(&data);
        assert_eq!(imported.len(), 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source_row, 5);

        let preview = resolve("Excel", imported, errors, &catalog());
        assert_eq!(preview.resolved.len(), 2);
        assert_eq!(preview.unresolved.len(), 2);
        assert_eq!(preview.unresolved[0].source_row, 4);
        assert_eq!(preview.summary(), "Excel: 2 dòng hợp lệ, 2 dòng lỗi");

        let first = &preview.resolved[0];
        assert_eq!(first.fields[&FormField::Platform], "Shopee");
        assert_eq!(first.fields[&FormField::UnitPrice], "50000");
        let second = &preview.resolved[1];
        assert_eq!(second.fields[&FormField::Quantity], "1");
        assert_eq!(second.fields[&FormField::UnitPrice], "28000");
        assert!(!second.fields.contains_key(&FormField::Platform));
    }

    #[test]
    fn test_labels_expand_per_product_line() {
        let labels = vec![
            ShippingLabel {
                tracking_code: "SPX1".into(),
                recipient: "An".into(),
                platform: Some("Shopee".into()),
                lines: vec![
                    LabelLine { sku: "TAO-01".into(), quantity: 2 },
                    LabelLine { sku: "XXX".into(), quantity: 1 },
                ],
                ..Default::default()
            },
            ShippingLabel {
                tracking_code: "SPX2".into(),
                ..Default::default()
            },
        ];

        let (imported, errors) = from_labels(&labels);
        assert_eq!(imported.len(), 2);
        assert_eq!(errors.len(), 1);

        let preview = resolve("PDF", imported, errors, &catalog());
        assert_eq!(preview.resolved.len(), 1);
        assert_eq!(preview.resolved[0].fields[&FormField::TrackingCode], "SPX1");
        assert_eq!(preview.resolved[0].fields[&FormField::Quantity], "2");
        assert_eq!(preview.unresolved.len(), 2);
    }
}
