use leptos::prelude::*;

/// Small status pill: "success", "warning", "muted" or "accent"
#[component]
pub fn Badge(
    /// Visual tone
    #[prop(optional, into)]
    tone: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let tone_class = move || match tone.get().as_deref().unwrap_or("muted") {
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "accent" => "badge badge--accent",
        _ => "badge badge--muted",
    };

    view! {
        <span class=tone_class>
            {children()}
        </span>
    }
}
