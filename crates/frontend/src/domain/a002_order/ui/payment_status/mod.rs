pub mod state;
pub mod view;

pub use view::PaymentStatusPage;
