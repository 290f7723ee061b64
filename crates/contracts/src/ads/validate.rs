use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::draft::{AdDraft, GoogleAdType, MetaObjective, MetaPlatform};

// ============================================================================
// Fields and error kinds
// ============================================================================

/// Every field the two form variants can carry. Keys double as the wire names
/// the presentation layer binds inputs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AdField {
    Name,
    Headline,
    Description,
    TargetUrl,
    Budget,
    StartDate,
    EndDate,
    // Google variant
    Keywords,
    AdType,
    // Meta variant
    Platform,
    Objective,
    Placement,
}

impl AdField {
    pub fn as_key(&self) -> &'static str {
        match self {
            AdField::Name => "name",
            AdField::Headline => "headline",
            AdField::Description => "description",
            AdField::TargetUrl => "targetUrl",
            AdField::Budget => "budget",
            AdField::StartDate => "startDate",
            AdField::EndDate => "endDate",
            AdField::Keywords => "keywords",
            AdField::AdType => "adType",
            AdField::Platform => "platform",
            AdField::Objective => "objective",
            AdField::Placement => "placement",
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    TooShort,
    Required,
    InvalidUrl,
    InvalidEnum,
}

/// All failures of one validation pass, keyed by field. A pass never
/// short-circuits, so several errors can be present at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<AdField, FieldErrorKind>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: AdField) -> Option<FieldErrorKind> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: AdField, kind: FieldErrorKind) {
        self.0.insert(field, kind);
    }

    pub fn iter(&self) -> impl Iterator<Item = (AdField, FieldErrorKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Minimal absolute-URL check: a scheme, "://" and a non-empty host, with no
/// whitespace anywhere. Mirrors what the original form accepted.
pub fn is_absolute_url(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let leads_with_letter = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic());
    if !leads_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return false;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty()
}

/// Apply the draft's active schema and collect every failure.
pub fn validate(draft: &AdDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    let common = draft.common();

    if common.name.chars().count() < 2 {
        errors.insert(AdField::Name, FieldErrorKind::TooShort);
    }
    if common.headline.chars().count() < 5 {
        errors.insert(AdField::Headline, FieldErrorKind::TooShort);
    }
    if common.description.chars().count() < 10 {
        errors.insert(AdField::Description, FieldErrorKind::TooShort);
    }
    if !is_absolute_url(&common.target_url) {
        errors.insert(AdField::TargetUrl, FieldErrorKind::InvalidUrl);
    }
    if common.budget.is_empty() {
        errors.insert(AdField::Budget, FieldErrorKind::Required);
    }
    if common.start_date.is_empty() {
        errors.insert(AdField::StartDate, FieldErrorKind::Required);
    }
    // end_date is optional and never fails

    match draft {
        AdDraft::Google(google) => {
            if google.keywords.is_empty() {
                errors.insert(AdField::Keywords, FieldErrorKind::Required);
            }
            if GoogleAdType::parse(&google.ad_type).is_none() {
                errors.insert(AdField::AdType, FieldErrorKind::InvalidEnum);
            }
        }
        AdDraft::Meta(meta) => {
            if MetaPlatform::parse(&meta.platform).is_none() {
                errors.insert(AdField::Platform, FieldErrorKind::InvalidEnum);
            }
            if MetaObjective::parse(&meta.objective).is_none() {
                errors.insert(AdField::Objective, FieldErrorKind::InvalidEnum);
            }
            // placement is optional free text and never fails
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformId;

    fn filled_google() -> AdDraft {
        let mut draft = AdDraft::for_platform(&PlatformId::GoogleAds);
        {
            let common = draft.common_mut();
            common.name = "AB".to_string();
            common.headline = "Hello World".to_string();
            common.description = "A sufficiently long description".to_string();
            common.target_url = "https://example.com".to_string();
            common.budget = "100".to_string();
            common.start_date = "2024-01-01".to_string();
        }
        if let AdDraft::Google(google) = &mut draft {
            google.keywords = "ads".to_string();
            google.ad_type = "search".to_string();
        }
        draft
    }

    #[test]
    fn url_check() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("http://example.com/landing?x=1"));
        assert!(is_absolute_url("ftp://files.example.com"));
        assert!(!is_absolute_url("not-a-url"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("://example.com"));
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url("https:// example.com"));
        assert!(!is_absolute_url("1http://example.com"));
    }

    #[test]
    fn empty_form_collects_all_errors_at_once() {
        let mut draft = AdDraft::for_platform(&PlatformId::MetaAds);
        draft.common_mut().start_date.clear();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(AdField::Name), Some(FieldErrorKind::TooShort));
        assert_eq!(errors.get(AdField::Headline), Some(FieldErrorKind::TooShort));
        assert_eq!(
            errors.get(AdField::Description),
            Some(FieldErrorKind::TooShort)
        );
        assert_eq!(
            errors.get(AdField::TargetUrl),
            Some(FieldErrorKind::InvalidUrl)
        );
        assert_eq!(errors.get(AdField::Budget), Some(FieldErrorKind::Required));
        assert_eq!(
            errors.get(AdField::StartDate),
            Some(FieldErrorKind::Required)
        );
        // defaulted selects are valid, optional fields never fail
        assert_eq!(errors.get(AdField::Platform), None);
        assert_eq!(errors.get(AdField::Objective), None);
        assert_eq!(errors.get(AdField::Placement), None);
        assert_eq!(errors.get(AdField::EndDate), None);
    }

    #[test]
    fn google_variant_requires_keywords_and_known_ad_type() {
        let mut draft = filled_google();
        if let AdDraft::Google(google) = &mut draft {
            google.keywords.clear();
            google.ad_type = "banner".to_string();
        }
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(AdField::Keywords), Some(FieldErrorKind::Required));
        assert_eq!(errors.get(AdField::AdType), Some(FieldErrorKind::InvalidEnum));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn meta_enums_are_checked() {
        let mut draft = AdDraft::for_platform(&PlatformId::MetaAds);
        {
            let common = draft.common_mut();
            common.name = "AB".to_string();
            common.headline = "Hello World".to_string();
            common.description = "A sufficiently long description".to_string();
            common.target_url = "https://example.com".to_string();
            common.budget = "100".to_string();
        }
        if let AdDraft::Meta(meta) = &mut draft {
            meta.platform = "tiktok".to_string();
            meta.objective = "growth".to_string();
        }
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(AdField::Platform), Some(FieldErrorKind::InvalidEnum));
        assert_eq!(
            errors.get(AdField::Objective),
            Some(FieldErrorKind::InvalidEnum)
        );
    }

    #[test]
    fn invalid_url_fails_even_when_everything_else_is_valid() {
        let mut draft = filled_google();
        draft.common_mut().target_url = "not-a-url".to_string();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(AdField::TargetUrl),
            Some(FieldErrorKind::InvalidUrl)
        );
    }

    #[test]
    fn filled_google_form_is_clean() {
        assert!(validate(&filled_google()).is_ok());
    }
}
