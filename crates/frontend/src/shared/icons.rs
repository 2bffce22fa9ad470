use leptos::prelude::*;

/// Содержимое SVG (viewBox 0 0 24 24, stroke-иконки)
fn icon_body(name: &str) -> &'static str {
    match name {
        "orders" => r#"<path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"/><path d="M3 6h18"/><path d="M16 10a4 4 0 0 1-8 0"/>"#,
        "payments" => r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M2 10h20"/><path d="M6 15h4"/>"#,
        "report" => r#"<path d="M3 3v18h18"/><path d="M7 16v-5"/><path d="M12 16V8"/><path d="M17 16v-3"/>"#,
        "store" => r#"<path d="M3 9 5 3h14l2 6"/><path d="M4 9v12h16V9"/><path d="M9 21v-6h6v6"/>"#,
        "plus" => r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#,
        "trash" => r#"<path d="M3 6h18"/><path d="M8 6V4h8v2"/><path d="M19 6l-1 14H6L5 6"/>"#,
        "upload" => r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="M17 8l-5-5-5 5"/><path d="M12 3v12"/>"#,
        "x" => r#"<path d="M18 6 6 18"/><path d="M6 6l12 12"/>"#,
        "menu" => r#"<path d="M3 6h18"/><path d="M3 12h18"/><path d="M3 18h18"/>"#,
        "chevron-left" => r#"<path d="m15 18-6-6 6-6"/>"#,
        "chevron-right" => r#"<path d="m9 18 6-6-6-6"/>"#,
        "chevron-down" => r#"<path d="m6 9 6 6 6-6"/>"#,
        "chevrons-left" => r#"<path d="m11 17-5-5 5-5"/><path d="m18 17-5-5 5-5"/>"#,
        "chevrons-right" => r#"<path d="m13 17 5-5-5-5"/><path d="m6 17 5-5-5-5"/>"#,
        _ => r#"<circle cx="12" cy="12" r="3"/>"#,
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "chevron-left" | "chevron-right" | "chevron-down" | "chevrons-left" | "chevrons-right" | "x" => "16",
        _ => "20",
    };
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_body(name)
        ></svg>
    }
    .into_any()
}
