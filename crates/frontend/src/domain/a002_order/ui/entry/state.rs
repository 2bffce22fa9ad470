use super::form_set::{FormSet, WidgetInstance};
use super::import::ImportPreview;
use super::mode::{FormsReset, LazyInit, OrderModeState};
use contracts::domain::a001_product::{Product, ProductOption};
use contracts::domain::a002_order::{CreationMethod, OrderType};
use leptos::prelude::*;

/// Состояние страницы создания заказов. Создаётся при каждом монтировании страницы.
#[derive(Clone, Copy)]
pub struct OrderEntryState {
    pub mode: RwSignal<OrderModeState>,
    pub forms: RwSignal<FormSet>,
    pub products: RwSignal<Vec<Product>>,
    pub pdf_preview: RwSignal<Option<ImportPreview>>,
    pub excel_preview: RwSignal<Option<ImportPreview>>,
    /// Формы в анимации удаления
    pub leaving: RwSignal<Vec<WidgetInstance>>,
    /// Поле «số lượng đơn»
    pub count_input: RwSignal<String>,
    pub submitting: RwSignal<bool>,
    pub importing: RwSignal<bool>,
}

impl OrderEntryState {
    pub fn new(max_forms: usize) -> Self {
        Self {
            mode: RwSignal::new(OrderModeState::new()),
            forms: RwSignal::new(FormSet::new(max_forms)),
            products: RwSignal::new(Vec::new()),
            pdf_preview: RwSignal::new(None),
            excel_preview: RwSignal::new(None),
            leaving: RwSignal::new(Vec::new()),
            count_input: RwSignal::new("1".to_string()),
            submitting: RwSignal::new(false),
            importing: RwSignal::new(false),
        }
    }

    pub fn product_options(&self) -> Signal<Vec<ProductOption>> {
        let products = self.products;
        Signal::derive(move || products.with(|list| list.iter().map(ProductOption::from).collect()))
    }

    pub fn select_order_type(&self, order_type: OrderType) {
        if let Some(FormsReset) = self.mode.try_update(|m| m.select_order_type(order_type)) {
            self.reset_forms();
        }
    }

    pub fn select_creation_method(&self, method: CreationMethod) -> Option<LazyInit> {
        self.mode
            .try_update(|m| m.select_creation_method(method))
            .flatten()
    }

    /// Пересоздать формы по значению поля количества
    pub fn reset_forms(&self) {
        let count = self
            .count_input
            .get_untracked()
            .trim()
            .parse::<usize>()
            .unwrap_or(1);
        self.forms.update(|f| f.regenerate(count));
        self.leaving.set(Vec::new());
        self.sync_count();
    }

    pub fn sync_count(&self) {
        let len = self.forms.with_untracked(|f| f.len());
        self.count_input.set(len.to_string());
    }

    /// Загрузить распознанные строки в формы и вернуться к ручному вводу
    pub fn apply_preview(&self, preview: ImportPreview) -> usize {
        let applied = self
            .forms
            .try_update(|f| f.apply_imported(preview.resolved))
            .unwrap_or(0);
        self.sync_count();
        self.select_creation_method(CreationMethod::Manual);
        applied
    }
}
