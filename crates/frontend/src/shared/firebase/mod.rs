//! Шлюз к realtime-базе (Firebase Realtime Database).
//!
//! Адресация по путям через `/`, одноразовое чтение, запись и подписка
//! на изменения. Схема данных не проверяется.

pub mod error;
pub mod gateway;
#[cfg(test)]
pub mod memory;
pub mod rest;

pub use error::StoreError;
pub use gateway::{fetch_typed, put_typed, ChangeListener, RemoteStore, Subscription};
pub use rest::{use_remote_store, FirebaseRest};
