use serde::Deserialize;

/// Конфигурация клиента
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub firebase: FirebaseConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FirebaseConfig {
    pub database_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub notification_timeout_ms: u32,
    pub delete_transition_ms: u32,
    pub max_order_forms: usize,
    pub report_page_size: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[firebase]
database_url = "https://store-orders-default-rtdb.asia-southeast1.firebasedatabase.app"

[ui]
notification_timeout_ms = 3000
delete_transition_ms = 300
max_order_forms = 50
report_page_size = 20
"#;

/// localStorage key that overrides the database URL at runtime
pub const DATABASE_URL_OVERRIDE_KEY: &str = "firebaseDatabaseUrl";

/// Load configuration
///
/// Order of precedence:
/// 1. localStorage `firebaseDatabaseUrl` (runtime override)
/// 2. `FIREBASE_DATABASE_URL` / `FIREBASE_AUTH_TOKEN` at build time
/// 3. Embedded default config
pub fn load_config() -> AppConfig {
    let mut config = match toml::from_str::<AppConfig>(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid: {}", e);
            fallback_config()
        }
    };

    apply_overrides(
        &mut config,
        option_env!("FIREBASE_DATABASE_URL"),
        option_env!("FIREBASE_AUTH_TOKEN"),
        crate::shared::storage::get_item(DATABASE_URL_OVERRIDE_KEY).as_deref(),
    );

    log::info!("Using database: {}", config.firebase.database_url);
    config
}

/// Конфигурация из context; вне App загружается заново
pub fn use_app_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().unwrap_or_else(load_config)
}

fn apply_overrides(
    config: &mut AppConfig,
    build_url: Option<&str>,
    build_token: Option<&str>,
    runtime_url: Option<&str>,
) {
    if let Some(url) = build_url.filter(|u| !u.trim().is_empty()) {
        config.firebase.database_url = url.trim().to_string();
    }
    if let Some(token) = build_token.filter(|t| !t.trim().is_empty()) {
        config.firebase.auth_token = Some(token.trim().to_string());
    }
    if let Some(url) = runtime_url.filter(|u| !u.trim().is_empty()) {
        config.firebase.database_url = url.trim().to_string();
    }
    config.firebase.database_url = config
        .firebase
        .database_url
        .trim_end_matches('/')
        .to_string();
}

fn fallback_config() -> AppConfig {
    AppConfig {
        firebase: FirebaseConfig {
            database_url: String::new(),
            auth_token: None,
        },
        ui: UiConfig {
            notification_timeout_ms: 3000,
            delete_transition_ms: 300,
            max_order_forms: 50,
            report_page_size: 20,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert!(config.firebase.database_url.starts_with("https://"));
        assert_eq!(config.firebase.auth_token, None);
        assert_eq!(config.ui.max_order_forms, 50);
        assert_eq!(config.ui.delete_transition_ms, 300);
    }

    #[test]
    fn test_runtime_override_wins() {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_overrides(
            &mut config,
            Some("https://build.example.com"),
            Some("secret"),
            Some("https://runtime.example.com/"),
        );
        assert_eq!(config.firebase.database_url, "https://runtime.example.com");
        assert_eq!(config.firebase.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        let before = config.firebase.database_url.clone();
        apply_overrides(&mut config, Some("  "), None, Some(""));
        assert_eq!(config.firebase.database_url, before);
    }
}
