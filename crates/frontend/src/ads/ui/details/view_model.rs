use contracts::ads::{
    AdField, AdFormController, FieldErrorKind, FieldErrors, FormState, SchemaKind, Submission,
};
use contracts::platform::PlatformId;
use leptos::prelude::*;

// ============================================================================
// Tabs
// ============================================================================

/// Sections of the ad form. Keywords only exists for the Google schema,
/// Targeting only for the Meta schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    Basic,
    Creative,
    Keywords,
    Targeting,
}

impl FormTab {
    pub fn label_key(&self) -> &'static str {
        match self {
            FormTab::Basic => "form.tab.basic",
            FormTab::Creative => "form.tab.creative",
            FormTab::Keywords => "form.tab.keywords",
            FormTab::Targeting => "form.tab.targeting",
        }
    }

    pub fn for_schema(schema: SchemaKind) -> Vec<FormTab> {
        match schema {
            SchemaKind::Google => vec![FormTab::Basic, FormTab::Creative, FormTab::Keywords],
            SchemaKind::Meta => vec![FormTab::Basic, FormTab::Creative, FormTab::Targeting],
        }
    }
}

/// Translation key for one validation failure.
pub fn error_key(field: AdField, kind: FieldErrorKind) -> &'static str {
    match (field, kind) {
        (AdField::Name, FieldErrorKind::TooShort) => "error.name.tooShort",
        (AdField::Headline, FieldErrorKind::TooShort) => "error.headline.tooShort",
        (AdField::Description, FieldErrorKind::TooShort) => "error.description.tooShort",
        (_, FieldErrorKind::InvalidUrl) => "error.invalidUrl",
        (_, FieldErrorKind::InvalidEnum) => "error.invalidEnum",
        _ => "error.required",
    }
}

// ============================================================================
// View model
// ============================================================================

/// Reactive wrapper around the form state machine. Field errors are only
/// surfaced after the first submit attempt; from then on every edit
/// revalidates so messages clear as the user types.
#[derive(Clone, Copy)]
pub struct AdFormVm {
    controller: RwSignal<AdFormController>,
    errors: RwSignal<FieldErrors>,
    pub active_tab: RwSignal<FormTab>,
    attempted: RwSignal<bool>,
}

impl AdFormVm {
    pub fn new(platform: PlatformId) -> Self {
        Self {
            controller: RwSignal::new(AdFormController::new(platform)),
            errors: RwSignal::new(FieldErrors::default()),
            active_tab: RwSignal::new(FormTab::Basic),
            attempted: RwSignal::new(false),
        }
    }

    pub fn state(&self) -> FormState {
        self.controller.with(|c| c.state())
    }

    pub fn schema(&self) -> Option<SchemaKind> {
        self.controller.with(|c| c.schema())
    }

    pub fn platform(&self) -> PlatformId {
        self.controller.with_untracked(|c| c.platform().clone())
    }

    pub fn tabs(&self) -> Vec<FormTab> {
        self.schema().map(FormTab::for_schema).unwrap_or_default()
    }

    /// Input-binding signal for one field.
    pub fn field(&self, field: AdField) -> Signal<String> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.field_value(field).to_string()))
    }

    pub fn set_field(&self, field: AdField, value: String) {
        self.controller.update(|c| c.set_field(field, &value));
        if self.attempted.get_untracked() {
            self.refresh_errors();
        }
    }

    /// Translation key of the current error on a field, if any.
    pub fn error_of(&self, field: AdField) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| e.get(field).map(|kind| error_key(field, kind)))
        })
    }

    /// Try to finalize the form. `Ok` carries the redirect target; `Err(true)`
    /// means validation failed and errors are now showing.
    pub fn submit(&self) -> Result<Submission, bool> {
        self.attempted.set(true);
        let outcome = self
            .controller
            .try_update(|c| c.submit())
            .unwrap_or_else(|| Err(FieldErrors::default()));
        match outcome {
            Ok(submission) => {
                self.errors.set(FieldErrors::default());
                Ok(submission)
            }
            Err(errors) => {
                let has_errors = !errors.is_empty();
                self.errors.set(errors);
                Err(has_errors)
            }
        }
    }

    fn refresh_errors(&self) {
        let outcome = self.controller.with_untracked(|c| c.validate());
        self.errors.set(outcome.err().unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_sets_follow_the_schema() {
        assert_eq!(
            FormTab::for_schema(SchemaKind::Google),
            vec![FormTab::Basic, FormTab::Creative, FormTab::Keywords]
        );
        assert_eq!(
            FormTab::for_schema(SchemaKind::Meta),
            vec![FormTab::Basic, FormTab::Creative, FormTab::Targeting]
        );
    }

    #[test]
    fn error_keys_are_field_specific_for_length_checks() {
        assert_eq!(
            error_key(AdField::Name, FieldErrorKind::TooShort),
            "error.name.tooShort"
        );
        assert_eq!(
            error_key(AdField::Headline, FieldErrorKind::TooShort),
            "error.headline.tooShort"
        );
        assert_eq!(
            error_key(AdField::TargetUrl, FieldErrorKind::InvalidUrl),
            "error.invalidUrl"
        );
        assert_eq!(
            error_key(AdField::Budget, FieldErrorKind::Required),
            "error.required"
        );
        assert_eq!(
            error_key(AdField::AdType, FieldErrorKind::InvalidEnum),
            "error.invalidEnum"
        );
    }
}
