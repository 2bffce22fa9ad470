pub mod center;
pub mod global_context;
pub mod header;
pub mod left;
pub mod tabs;

use leptos::prelude::*;

/// Каркас приложения.
///
/// ```text
/// +-------------------------------+
/// |            Header             |
/// +-------------------------------+
/// |  Sidebar  |  Tabs + content   |
/// +-------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
