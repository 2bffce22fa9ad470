use super::error::StoreError;
use super::gateway::{CancelFlag, ChangeListener, RemoteStore, Subscription};
use crate::shared::config::FirebaseConfig;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Firebase Realtime Database через REST.
///
/// `GET`/`PUT` на `{database_url}/{path}.json`; подписка идёт через
/// потоковый endpoint и браузерный `EventSource`.
#[derive(Clone, Debug, PartialEq)]
pub struct FirebaseRest {
    base_url: String,
    auth_token: Option<String>,
}

impl FirebaseRest {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self {
            base_url: config.database_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        let mut url = format!("{}/{}.json", self.base_url, path.trim_matches('/'));
        if let Some(token) = &self.auth_token {
            url.push_str("?auth=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }

    fn check_status(resp: &Response, path: &str) -> Result<(), StoreError> {
        match resp.status() {
            401 | 403 => Err(StoreError::Rejected(path.to_string())),
            _ if !resp.ok() => Err(StoreError::Http {
                status: resp.status(),
                path: path.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Клиент базы из context
pub fn use_remote_store() -> FirebaseRest {
    leptos::prelude::use_context::<FirebaseRest>()
        .unwrap_or_else(|| FirebaseRest::new(&crate::shared::config::use_app_config().firebase))
}

#[async_trait(?Send)]
impl RemoteStore for FirebaseRest {
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let resp = Request::get(&self.url_for(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_status(&resp, path)?;

        let value: Value = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("{}: {}", path, e)))?;
        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn set(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        let resp = Request::put(&self.url_for(path))
            .header("Accept", "application/json")
            .json(value)
            .map_err(|e| StoreError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_status(&resp, path)
    }

    fn subscribe(
        &self,
        path: &str,
        on_change: ChangeListener,
    ) -> Result<Subscription, StoreError> {
        let source = web_sys::EventSource::new(&self.url_for(path))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;

        // Поток присылает дельты (put/patch) относительно пути; проще
        // перечитать узел целиком, чем собирать дерево из дельт.
        // Перечитывание может завершиться уже после отписки.
        let cancelled = CancelFlag::default();
        let on_change = cancelled.guard(on_change);
        let store = self.clone();
        let watched = path.to_string();
        let handler = Closure::wrap(Box::new(move |_ev: web_sys::MessageEvent| {
            let store = store.clone();
            let watched = watched.clone();
            let on_change = on_change.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.get(&watched).await {
                    Ok(value) => on_change(value),
                    Err(e) => log::error!("Failed to refresh {} after change: {}", watched, e),
                }
            });
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);

        for event in ["put", "patch"] {
            source
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;
        }

        log::debug!("Subscribed to {}", path);
        let path = path.to_string();
        Ok(Subscription::new(move || {
            cancelled.cancel();
            source.close();
            drop(handler);
            log::debug!("Unsubscribed from {}", path);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> FirebaseConfig {
        FirebaseConfig {
            database_url: "https://demo.firebaseio.com/".into(),
            auth_token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_url_for_plain_path() {
        let rest = FirebaseRest::new(&config(None));
        assert_eq!(
            rest.url_for("/stores/s1/orders/"),
            "https://demo.firebaseio.com/stores/s1/orders.json"
        );
    }

    #[test]
    fn test_url_for_encodes_auth() {
        let rest = FirebaseRest::new(&config(Some("a b/c")));
        assert_eq!(
            rest.url_for("stores"),
            "https://demo.firebaseio.com/stores.json?auth=a%20b%2Fc"
        );
    }
}
