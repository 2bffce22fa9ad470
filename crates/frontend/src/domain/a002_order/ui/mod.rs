pub mod entry;
pub mod payment_status;
