use leptos::prelude::*;

/// Multi-line text field with label and inline-error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message shown below the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Number of visible rows
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let area_id = move || id.get().unwrap_or_default();
    let area_placeholder = move || placeholder.get().unwrap_or_default();
    let error_class = move || {
        if error.get().is_some() {
            "form__textarea form__textarea--error"
        } else {
            "form__textarea"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=area_id>
                    {l}
                </label>
            })}
            <textarea
                id=area_id
                class=error_class
                rows=rows.unwrap_or(4)
                placeholder=area_placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
