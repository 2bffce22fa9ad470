pub mod form_card;
pub mod form_set;
pub mod import;
pub mod import_panel;
pub mod mode;
pub mod state;
pub mod submit;
pub mod view;

pub use view::OrderEntryPage;
