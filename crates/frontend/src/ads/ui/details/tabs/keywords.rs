use contracts::ads::{AdField, GoogleAdType};
use leptos::prelude::*;

use super::{field_error, field_label, title_case};
use crate::ads::ui::details::view_model::AdFormVm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::i18n::use_language;

/// Google-only section: search keywords and the ad type.
#[component]
pub fn KeywordsTab(vm: AdFormVm) -> impl IntoView {
    let language = use_language();

    let ad_type_options = Signal::derive(move || {
        GoogleAdType::all()
            .into_iter()
            .map(|t| (t.as_str().to_string(), title_case(t.as_str())))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="ad-form__tab">
            <Input
                label=field_label(language, "form.keywords")
                value=vm.field(AdField::Keywords)
                error=field_error(vm, language, AdField::Keywords)
                on_input=Callback::new(move |value| vm.set_field(AdField::Keywords, value))
            />
            <Select
                label=field_label(language, "form.adType")
                value=vm.field(AdField::AdType)
                options=ad_type_options
                error=field_error(vm, language, AdField::AdType)
                on_change=Callback::new(move |value| vm.set_field(AdField::AdType, value))
            />
        </div>
    }
}
