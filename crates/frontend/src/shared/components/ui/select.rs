use leptos::prelude::*;

/// Select component with label and inline-error support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Validation message shown below the select
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let error_class = move || {
        if error.get().is_some() {
            "form__select form__select--error"
        } else {
            "form__select"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=error_class
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
