use leptos::prelude::*;

/// Input component with label and inline-error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message shown below the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let error_class = move || {
        if error.get().is_some() {
            "form__input form__input--error"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("{} {}", error_class(), additional_class())
                type=input_t
                value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
