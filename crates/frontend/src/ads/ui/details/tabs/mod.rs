mod basic;
mod creative;
mod keywords;
mod targeting;

pub use basic::BasicTab;
pub use creative::CreativeTab;
pub use keywords::KeywordsTab;
pub use targeting::TargetingTab;

use contracts::ads::AdField;
use leptos::prelude::*;

use super::view_model::AdFormVm;
use crate::shared::i18n::{t, LanguageService};

pub(super) fn field_label(language: LanguageService, key: &'static str) -> Signal<String> {
    Signal::derive(move || t(language.current.get(), key).to_string())
}

pub(super) fn field_error(
    vm: AdFormVm,
    language: LanguageService,
    field: AdField,
) -> Signal<Option<String>> {
    let key = vm.error_of(field);
    Signal::derive(move || key.get().map(|k| t(language.current.get(), k).to_string()))
}

/// "search" -> "Search" for enum option labels.
pub(super) fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
