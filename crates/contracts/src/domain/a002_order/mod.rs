pub mod aggregate;
pub mod enums;

pub use aggregate::{Order, OrderItem};
pub use enums::{order_type_label, CreationMethod, OrderType, PaymentStatus};
