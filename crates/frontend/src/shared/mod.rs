pub mod components;
pub mod config;
pub mod date_utils;
pub mod excel_importer;
pub mod firebase;
pub mod icons;
pub mod notification;
pub mod number_format;
pub mod page_frame;
pub mod pdf_importer;
pub mod searchable_select;
pub mod storage;
