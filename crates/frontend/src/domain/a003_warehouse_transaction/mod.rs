pub mod api;
pub mod fan_out;

pub use fan_out::{log_order_transactions, FanOutSummary};
