use leptos::prelude::*;

/// Checkbox with a trailing label
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, receives the new checked state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <label class="form__checkbox" for=input_id>
            <input
                id=input_id
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
