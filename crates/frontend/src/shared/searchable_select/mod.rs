//! Выпадающий список товаров с поиском.
//!
//! `state`: чистая модель экземпляра (данные, фильтр, выбор, клавиатура),
//! `widget`: Leptos-компонент поверх неё.

pub mod state;
pub mod widget;

pub use state::{
    filter_items, DropdownRow, KeyOutcome, SearchableSelectConfig, SearchableSelectState,
};
pub use widget::SearchableSelect;
