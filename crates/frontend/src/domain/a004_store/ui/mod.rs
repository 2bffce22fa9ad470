pub mod selector;

pub use selector::StoreSelector;
