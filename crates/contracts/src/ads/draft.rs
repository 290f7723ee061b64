use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::platform::PlatformId;

// ============================================================================
// Common fields
// ============================================================================

/// Field values shared by every platform variant of the ad form.
///
/// All values are kept as the raw strings the form inputs produce; validation
/// interprets them. An empty `end_date` means "not set" (the field is
/// optional).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonAdFields {
    pub name: String,
    pub headline: String,
    pub description: String,
    pub target_url: String,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
}

impl CommonAdFields {
    /// Form defaults: empty text fields, start date preset to today.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            headline: String::new(),
            description: String::new(),
            target_url: String::new(),
            budget: String::new(),
            start_date: Local::now().format("%Y-%m-%d").to_string(),
            end_date: String::new(),
        }
    }
}

impl Default for CommonAdFields {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Platform-specific value lists
// ============================================================================

/// Allowed values of the Google `adType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoogleAdType {
    Search,
    Display,
    Video,
    Shopping,
}

impl GoogleAdType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "search" => Some(GoogleAdType::Search),
            "display" => Some(GoogleAdType::Display),
            "video" => Some(GoogleAdType::Video),
            "shopping" => Some(GoogleAdType::Shopping),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoogleAdType::Search => "search",
            GoogleAdType::Display => "display",
            GoogleAdType::Video => "video",
            GoogleAdType::Shopping => "shopping",
        }
    }

    pub fn all() -> [GoogleAdType; 4] {
        [
            GoogleAdType::Search,
            GoogleAdType::Display,
            GoogleAdType::Video,
            GoogleAdType::Shopping,
        ]
    }
}

/// Allowed values of the Meta `platform` field (which network the ad runs on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaPlatform {
    Facebook,
    Instagram,
    Both,
}

impl MetaPlatform {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "facebook" => Some(MetaPlatform::Facebook),
            "instagram" => Some(MetaPlatform::Instagram),
            "both" => Some(MetaPlatform::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaPlatform::Facebook => "facebook",
            MetaPlatform::Instagram => "instagram",
            MetaPlatform::Both => "both",
        }
    }

    pub fn all() -> [MetaPlatform; 3] {
        [MetaPlatform::Facebook, MetaPlatform::Instagram, MetaPlatform::Both]
    }
}

/// Allowed values of the Meta `objective` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaObjective {
    Awareness,
    Consideration,
    Conversion,
}

impl MetaObjective {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "awareness" => Some(MetaObjective::Awareness),
            "consideration" => Some(MetaObjective::Consideration),
            "conversion" => Some(MetaObjective::Conversion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaObjective::Awareness => "awareness",
            MetaObjective::Consideration => "consideration",
            MetaObjective::Conversion => "conversion",
        }
    }

    pub fn all() -> [MetaObjective; 3] {
        [
            MetaObjective::Awareness,
            MetaObjective::Consideration,
            MetaObjective::Conversion,
        ]
    }
}

// ============================================================================
// Draft variants
// ============================================================================

/// Google Ads variant of the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAdDraft {
    #[serde(flatten)]
    pub common: CommonAdFields,
    pub keywords: String,
    pub ad_type: String,
}

impl GoogleAdDraft {
    pub fn new() -> Self {
        Self {
            common: CommonAdFields::new(),
            keywords: String::new(),
            ad_type: GoogleAdType::Search.as_str().to_string(),
        }
    }
}

/// Meta Ads variant of the draft. `placement` is free-form and optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaAdDraft {
    #[serde(flatten)]
    pub common: CommonAdFields,
    pub platform: String,
    pub objective: String,
    pub placement: String,
}

impl MetaAdDraft {
    pub fn new() -> Self {
        Self {
            common: CommonAdFields::new(),
            platform: MetaPlatform::Both.as_str().to_string(),
            objective: MetaObjective::Conversion.as_str().to_string(),
            placement: String::new(),
        }
    }
}

/// Which validation schema a draft follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    Google,
    Meta,
}

/// The in-progress ad, tagged by its schema variant.
///
/// The variant is chosen once from the `PlatformId` and never changes for the
/// lifetime of a form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "camelCase")]
pub enum AdDraft {
    Google(GoogleAdDraft),
    Meta(MetaAdDraft),
}

impl AdDraft {
    /// Schema selection. Exactly `google-ads` gets the Google schema; every
    /// other segment, recognized or not, falls back to the Meta schema. The
    /// original product behaves this way and route handling relies on it.
    pub fn for_platform(platform: &PlatformId) -> Self {
        match platform {
            PlatformId::GoogleAds => AdDraft::Google(GoogleAdDraft::new()),
            _ => AdDraft::Meta(MetaAdDraft::new()),
        }
    }

    pub fn schema(&self) -> SchemaKind {
        match self {
            AdDraft::Google(_) => SchemaKind::Google,
            AdDraft::Meta(_) => SchemaKind::Meta,
        }
    }

    pub fn common(&self) -> &CommonAdFields {
        match self {
            AdDraft::Google(draft) => &draft.common,
            AdDraft::Meta(draft) => &draft.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonAdFields {
        match self {
            AdDraft::Google(draft) => &mut draft.common,
            AdDraft::Meta(draft) => &mut draft.common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_platform_gets_google_schema() {
        let draft = AdDraft::for_platform(&PlatformId::GoogleAds);
        assert_eq!(draft.schema(), SchemaKind::Google);
    }

    #[test]
    fn everything_else_falls_back_to_meta() {
        for platform in [
            PlatformId::MetaAds,
            PlatformId::LinkedIn,
            PlatformId::Other("pinterest".to_string()),
        ] {
            assert_eq!(AdDraft::for_platform(&platform).schema(), SchemaKind::Meta);
        }
    }

    #[test]
    fn defaults_match_the_form() {
        let AdDraft::Google(google) = AdDraft::for_platform(&PlatformId::GoogleAds) else {
            panic!("expected google variant");
        };
        assert_eq!(google.ad_type, "search");
        assert!(google.keywords.is_empty());
        assert!(!google.common.start_date.is_empty());

        let AdDraft::Meta(meta) = AdDraft::for_platform(&PlatformId::MetaAds) else {
            panic!("expected meta variant");
        };
        assert_eq!(meta.platform, "both");
        assert_eq!(meta.objective, "conversion");
        assert!(meta.placement.is_empty());
    }

    #[test]
    fn serde_round_trip_is_field_for_field() {
        let mut draft = AdDraft::for_platform(&PlatformId::GoogleAds);
        {
            let common = draft.common_mut();
            common.name = "Summer Sale".to_string();
            common.target_url = "https://example.com".to_string();
        }
        let json = serde_json::to_string(&draft).unwrap();
        let back: AdDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
