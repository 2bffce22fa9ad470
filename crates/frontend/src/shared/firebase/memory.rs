//! Дерево в памяти для тестов, с отказами по заданным путям.

use super::error::StoreError;
use super::gateway::{CancelFlag, ChangeListener, RemoteStore, Subscription};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    root: Value,
    failing: HashSet<String>,
    listeners: Vec<(u64, String, ChangeListener)>,
    next_listener_id: u64,
    writes: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn normalize(path: &str) -> String {
    segments(path).join("/")
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path)
        .into_iter()
        .try_fold(root, |node, key| node.as_object()?.get(key))
}

fn assign(root: &mut Value, path: &str, value: Value) {
    let segs = segments(path);
    let Some((last, parents)) = segs.split_last() else {
        *root = value;
        return;
    };

    let mut node = root;
    for key in parents {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node = node
            .as_object_mut()
            .map(|map| map.entry(key.to_string()).or_insert(Value::Null))
            .expect("node was just made an object");
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Some(map) = node.as_object_mut() {
        if value.is_null() {
            map.remove(*last);
        } else {
            map.insert(last.to_string(), value);
        }
    }
}

fn related(a: &str, b: &str) -> bool {
    let (a, b) = (segments(a), segments(b));
    let n = a.len().min(b.len());
    a[..n] == b[..n]
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: Value) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().root = root;
        store
    }

    /// Все последующие `get`/`set` ровно по этому пути завершаются ошибкой
    pub fn fail_path(&self, path: &str) {
        self.inner.borrow_mut().failing.insert(normalize(path));
    }

    /// Пути успешных записей в порядке завершения
    pub fn writes(&self) -> Vec<String> {
        self.inner.borrow().writes.clone()
    }

    pub fn value_at(&self, path: &str) -> Option<Value> {
        lookup(&self.inner.borrow().root, path)
            .filter(|v| !v.is_null())
            .cloned()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn check_failure(&self, path: &str) -> Result<(), StoreError> {
        if self.inner.borrow().failing.contains(&normalize(path)) {
            return Err(StoreError::Unavailable(normalize(path)));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl RemoteStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError> {
        self.check_failure(path)?;
        Ok(self.value_at(path))
    }

    async fn set(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        self.check_failure(path)?;

        let to_notify: Vec<(String, ChangeListener)> = {
            let mut inner = self.inner.borrow_mut();
            assign(&mut inner.root, path, value.clone());
            inner.writes.push(normalize(path));
            inner
                .listeners
                .iter()
                .filter(|(_, watched, _)| related(watched, path))
                .map(|(_, watched, listener)| (watched.clone(), listener.clone()))
                .collect()
        };

        for (watched, listener) in to_notify {
            listener(self.value_at(&watched));
        }
        Ok(())
    }

    fn subscribe(
        &self,
        path: &str,
        on_change: ChangeListener,
    ) -> Result<Subscription, StoreError> {
        self.check_failure(path)?;

        let cancelled = CancelFlag::default();
        let on_change = cancelled.guard(on_change);
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_listener_id += 1;
            let id = inner.next_listener_id;
            inner.listeners.push((id, normalize(path), on_change));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            cancelled.cancel();
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _, _)| *lid != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_set_and_get_nested() {
        let store = MemoryStore::new();
        store.set("stores/s1/orders/o1", &json!({"id": "o1"})).await.unwrap();
        store
            .set("stores/s1/orders/o1/paymentStatus", &json!("paid"))
            .await
            .unwrap();

        let order = store.get("stores/s1/orders/o1").await.unwrap().unwrap();
        assert_eq!(order["paymentStatus"], "paid");
        assert_eq!(order["id"], "o1");
        assert_eq!(store.get("stores/s2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_path() {
        let store = MemoryStore::new();
        store.fail_path("/a/b/");
        assert!(store.set("a/b", &json!(1)).await.is_err());
        assert!(store.set("a/c", &json!(1)).await.is_ok());
        assert_eq!(store.writes(), vec!["a/c".to_string()]);
    }

    #[tokio::test]
    async fn test_subscribers_of_ancestors_are_notified() {
        let store = MemoryStore::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = store
            .subscribe(
                "stores/s1/orders",
                Rc::new(move |value: Option<Value>| {
                    assert!(value.is_some());
                    counter.set(counter.get() + 1);
                }),
            )
            .unwrap();

        store.set("stores/s1/orders/o1", &json!({"id": "o1"})).await.unwrap();
        store.set("stores/s2/orders/o9", &json!({"id": "o9"})).await.unwrap();
        assert_eq!(hits.get(), 1);

        drop(sub);
        assert_eq!(store.listener_count(), 0);
        store.set("stores/s1/orders/o2", &json!({"id": "o2"})).await.unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[tokio::test]
    async fn test_no_delivery_after_unsubscribe() {
        let store = MemoryStore::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();

        // the first listener drops the second while one change is being delivered
        let victim = slot.clone();
        let _first = store
            .subscribe(
                "stores/s1",
                Rc::new(move |_: Option<Value>| {
                    victim.borrow_mut().take();
                }),
            )
            .unwrap();

        let late = Rc::new(Cell::new(0));
        let counter = late.clone();
        let second = store
            .subscribe(
                "stores/s1/orders",
                Rc::new(move |_: Option<Value>| counter.set(counter.get() + 1)),
            )
            .unwrap();
        *slot.borrow_mut() = Some(second);

        store.set("stores/s1/orders/o1", &json!({"id": "o1"})).await.unwrap();
        assert_eq!(late.get(), 0);
        assert_eq!(store.listener_count(), 1);
    }
}
