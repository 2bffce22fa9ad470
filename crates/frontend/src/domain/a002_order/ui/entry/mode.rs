//! Выбор типа заказа и способа создания.

use contracts::domain::a002_order::{CreationMethod, OrderType};

/// Смена типа заказа всегда требует пересоздать набор форм
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FormsReset;

/// Ленивая инициализация обработчика при первом выборе способа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyInit {
    Pdf,
    Excel,
}

/// Видимость управляемых секций страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionLayout {
    pub ecommerce_fields: bool,
    pub method_selector: bool,
    pub manual_group: bool,
    pub pdf_group: bool,
    pub excel_group: bool,
    pub wholesale_fields: bool,
}

/// Зависит только от пары (тип, способ)
pub fn section_layout(order_type: OrderType, method: CreationMethod) -> SectionLayout {
    match order_type {
        OrderType::Ecommerce => SectionLayout {
            ecommerce_fields: true,
            method_selector: true,
            manual_group: method == CreationMethod::Manual,
            pdf_group: method == CreationMethod::Pdf,
            excel_group: method == CreationMethod::Excel,
            wholesale_fields: false,
        },
        OrderType::Retail => SectionLayout {
            manual_group: true,
            ..SectionLayout::default()
        },
        OrderType::Wholesale => SectionLayout {
            manual_group: true,
            wholesale_fields: true,
            ..SectionLayout::default()
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderModeState {
    pub order_type: OrderType,
    pub creation_method: CreationMethod,
    pub initialized_pdf: bool,
    pub initialized_excel: bool,
}

impl OrderModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_order_type(&mut self, order_type: OrderType) -> FormsReset {
        self.order_type = order_type;
        FormsReset
    }

    pub fn select_creation_method(&mut self, method: CreationMethod) -> Option<LazyInit> {
        self.creation_method = method;
        match method {
            CreationMethod::Manual => None,
            CreationMethod::Pdf if !self.initialized_pdf => {
                self.initialized_pdf = true;
                Some(LazyInit::Pdf)
            }
            CreationMethod::Excel if !self.initialized_excel => {
                self.initialized_excel = true;
                Some(LazyInit::Excel)
            }
            _ => None,
        }
    }

    pub fn layout(&self) -> SectionLayout {
        section_layout(self.order_type, self.creation_method)
    }

    pub fn is_active_type(&self, order_type: OrderType) -> bool {
        self.order_type == order_type
    }

    pub fn is_active_method(&self, method: CreationMethod) -> bool {
        self.creation_method == method
    }
}
