use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, TAB_ORDER_ENTRY};
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::firebase::FirebaseRest;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(FirebaseRest::new(&config.firebase));
    provide_context(NotificationService::new(config.ui.notification_timeout_ms));
    provide_context(config);

    ctx.init_router_integration();
    if ctx.opened.with_untracked(|tabs| tabs.is_empty()) {
        ctx.open_tab(TAB_ORDER_ENTRY, tab_label_for_key(TAB_ORDER_ENTRY));
    }

    view! {
        <Shell />
        <NotificationHost />
    }
}
