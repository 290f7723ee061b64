//! Platform-aware ad-creation form: draft variants, validation rules and the
//! state machine driving the UI.

pub mod controller;
pub mod draft;
pub mod validate;

pub use controller::{AdFormController, FormState, Submission};
pub use draft::{
    AdDraft, CommonAdFields, GoogleAdDraft, GoogleAdType, MetaAdDraft, MetaObjective,
    MetaPlatform, SchemaKind,
};
pub use validate::{is_absolute_url, validate, AdField, FieldErrorKind, FieldErrors};
