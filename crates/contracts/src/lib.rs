//! Общие типы домена для фронтенда и внешних инструментов.
//!
//! Здесь нет I/O: только serde-структуры, справочные перечисления
//! и чистые правила (пути в базе, построение складских записей).

pub mod domain;
pub mod shared;
