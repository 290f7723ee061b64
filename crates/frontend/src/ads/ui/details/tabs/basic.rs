use contracts::ads::AdField;
use leptos::prelude::*;

use super::{field_error, field_label};
use crate::ads::ui::details::view_model::AdFormVm;
use crate::shared::components::ui::Input;
use crate::shared::i18n::use_language;

/// Campaign name, budget and schedule.
#[component]
pub fn BasicTab(vm: AdFormVm) -> impl IntoView {
    let language = use_language();

    view! {
        <div class="ad-form__tab">
            <Input
                label=field_label(language, "form.name")
                value=vm.field(AdField::Name)
                error=field_error(vm, language, AdField::Name)
                on_input=Callback::new(move |value| vm.set_field(AdField::Name, value))
            />
            <Input
                label=field_label(language, "form.budget")
                input_type="number"
                value=vm.field(AdField::Budget)
                error=field_error(vm, language, AdField::Budget)
                on_input=Callback::new(move |value| vm.set_field(AdField::Budget, value))
            />
            <Input
                label=field_label(language, "form.startDate")
                input_type="date"
                value=vm.field(AdField::StartDate)
                error=field_error(vm, language, AdField::StartDate)
                on_input=Callback::new(move |value| vm.set_field(AdField::StartDate, value))
            />
            <Input
                label=field_label(language, "form.endDate")
                input_type="date"
                value=vm.field(AdField::EndDate)
                on_input=Callback::new(move |value| vm.set_field(AdField::EndDate, value))
            />
        </div>
    }
}
