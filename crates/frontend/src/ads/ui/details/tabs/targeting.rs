use contracts::ads::{AdField, MetaObjective, MetaPlatform};
use leptos::prelude::*;

use super::{field_error, field_label, title_case};
use crate::ads::ui::details::view_model::AdFormVm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::i18n::use_language;

/// Meta-only section: network, campaign objective and placement.
#[component]
pub fn TargetingTab(vm: AdFormVm) -> impl IntoView {
    let language = use_language();

    let platform_options = Signal::derive(move || {
        MetaPlatform::all()
            .into_iter()
            .map(|p| (p.as_str().to_string(), title_case(p.as_str())))
            .collect::<Vec<_>>()
    });
    let objective_options = Signal::derive(move || {
        MetaObjective::all()
            .into_iter()
            .map(|o| (o.as_str().to_string(), title_case(o.as_str())))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="ad-form__tab">
            <Select
                label=field_label(language, "form.platform")
                value=vm.field(AdField::Platform)
                options=platform_options
                error=field_error(vm, language, AdField::Platform)
                on_change=Callback::new(move |value| vm.set_field(AdField::Platform, value))
            />
            <Select
                label=field_label(language, "form.objective")
                value=vm.field(AdField::Objective)
                options=objective_options
                error=field_error(vm, language, AdField::Objective)
                on_change=Callback::new(move |value| vm.set_field(AdField::Objective, value))
            />
            <Input
                label=field_label(language, "form.placement")
                value=vm.field(AdField::Placement)
                on_input=Callback::new(move |value| vm.set_field(AdField::Placement, value))
            />
        </div>
    }
}
