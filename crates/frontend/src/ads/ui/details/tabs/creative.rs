use contracts::ads::AdField;
use leptos::prelude::*;

use super::{field_error, field_label};
use crate::ads::ui::details::view_model::AdFormVm;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::i18n::use_language;

/// Ad copy: headline, description and the landing URL.
#[component]
pub fn CreativeTab(vm: AdFormVm) -> impl IntoView {
    let language = use_language();

    view! {
        <div class="ad-form__tab">
            <Input
                label=field_label(language, "form.headline")
                value=vm.field(AdField::Headline)
                error=field_error(vm, language, AdField::Headline)
                on_input=Callback::new(move |value| vm.set_field(AdField::Headline, value))
            />
            <Textarea
                label=field_label(language, "form.description")
                value=vm.field(AdField::Description)
                error=field_error(vm, language, AdField::Description)
                on_input=Callback::new(move |value| vm.set_field(AdField::Description, value))
            />
            <Input
                label=field_label(language, "form.targetUrl")
                placeholder="https://example.com/landing"
                value=vm.field(AdField::TargetUrl)
                error=field_error(vm, language, AdField::TargetUrl)
                on_input=Callback::new(move |value| vm.set_field(AdField::TargetUrl, value))
            />
        </div>
    }
}
