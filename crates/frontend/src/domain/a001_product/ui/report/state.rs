use contracts::domain::a001_product::Product;
use contracts::domain::a003_warehouse_transaction::{TransactionKind, WarehouseTransaction};
use leptos::prelude::*;
use std::collections::HashMap;

/// Строка отчёта: товар и его суммарный расход
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub product_id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub sold_quantity: u64,
    pub sold_value: f64,
}

/// Соединить каталог с расходными проводками. Порядок строк = порядок товаров.
pub fn build_report_rows(
    products: &[Product],
    transactions: &[WarehouseTransaction],
) -> Vec<ReportRow> {
    let mut totals: HashMap<&str, (u64, f64)> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Out)
    {
        let entry = totals.entry(tx.product_id.as_str()).or_default();
        entry.0 += tx.quantity as u64;
        entry.1 += tx.total_value;
    }

    products
        .iter()
        .map(|p| {
            let (sold_quantity, sold_value) =
                totals.get(p.id.as_str()).copied().unwrap_or_default();
            ReportRow {
                product_id: p.id.clone(),
                name: p.name.clone(),
                sku: p.sku.clone(),
                price: p.price,
                stock: p.stock,
                sold_quantity,
                sold_value,
            }
        })
        .collect()
}

/// Поиск по названию и SKU без учёта регистра
pub fn filter_rows(rows: &[ReportRow], query: &str) -> Vec<ReportRow> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| r.name.to_lowercase().contains(&query) || r.sku.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 0-based, уже приведена к допустимому диапазону
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let items = rows
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect();

    PageSlice {
        items,
        page,
        total_pages,
        total_count,
    }
}

#[derive(Clone, Debug)]
pub struct ReportState {
    pub query: String,
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
}

impl ReportState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 0,
            page_size,
            is_loaded: false,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ReportState> {
    RwSignal::new(ReportState::new(page_size))
}
