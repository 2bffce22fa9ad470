pub mod parser;
pub mod types;

pub use parser::read_excel_from_file;
pub use types::{ColumnDef, ColumnMapping, DataType, ExcelData, ORDER_IMPORT_COLUMNS};
