pub mod aggregate;

pub use aggregate::{TransactionKind, WarehouseTransaction};
