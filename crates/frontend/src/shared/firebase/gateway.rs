use super::error::StoreError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

/// Слушатель подписки; получает новое значение по пути (None, если узел удалён)
pub type ChangeListener = Rc<dyn Fn(Option<Value>)>;

/// Флаг отмены, общий для подписки и уже запущенных чтений.
#[derive(Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Слушатель, который молчит после `cancel`
    pub fn guard(&self, on_change: ChangeListener) -> ChangeListener {
        let flag = self.clone();
        Rc::new(move |value: Option<Value>| {
            if !flag.is_cancelled() {
                on_change(value);
            }
        })
    }
}

/// Активная подписка. Отписывается явно через `unsubscribe` или при drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Дерево значений с адресацией по пути.
///
/// Запись по пути побеждает последней; защиты от перезаписи и транзакций
/// на несколько путей нет.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Одноразовое чтение. `Ok(None)`, если по пути ничего нет.
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError>;

    /// Заменить значение по пути.
    async fn set(&self, path: &str, value: &Value) -> Result<(), StoreError>;

    /// Следить за изменениями по пути, пока подписка жива.
    /// После отписки слушатель больше не вызывается, даже из начатых чтений.
    fn subscribe(&self, path: &str, on_change: ChangeListener)
        -> Result<Subscription, StoreError>;
}

/// Прочитать значение и десериализовать его
pub async fn fetch_typed<T, S>(store: &S, path: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: RemoteStore + ?Sized,
{
    match store.get(path).await? {
        None => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::Decode(format!("{}: {}", path, e))),
    }
}

/// Сериализовать значение и записать его
pub async fn put_typed<T, S>(store: &S, path: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: RemoteStore + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|e| StoreError::Encode(e.to_string()))?;
    store.set(path, &value).await
}
