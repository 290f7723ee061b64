use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::{AdDraft, SchemaKind};
use super::validate::{validate, AdField, FieldErrors};
use crate::platform::{subscription_tier, AccessPolicy, AccessTier, PlatformId};

// ============================================================================
// States
// ============================================================================

/// Observable lifecycle tag of one ad-creation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormState {
    /// Premium platform without entitlement; the only way out is navigating
    /// away.
    Blocked,
    Editing,
    /// Terminal; the page is expected to be torn down after the redirect.
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
enum Phase {
    Blocked,
    Editing { draft: AdDraft },
    Submitted { draft: AdDraft },
}

/// Outcome handed to collaborators after a successful submit: the validated
/// draft plus the navigation request back to the platform dashboard. The
/// success notification carries no payload beyond a confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub draft: AdDraft,
    pub redirect_to: String,
}

// ============================================================================
// Controller
// ============================================================================

/// State machine behind the ad-creation form.
///
/// Owns the draft, selects the schema variant from the platform once at
/// construction, gates access by tier and collects validation errors without
/// short-circuiting. Everything is synchronous and in-memory; a real backend
/// submission would need an extra `Submitting` state to guard against
/// double-submission, which is deliberately out of scope here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdFormController {
    platform: PlatformId,
    tier: AccessTier,
    phase: Phase,
}

impl AdFormController {
    /// Construct with the default entitlement policy (static allow-list).
    pub fn new(platform: PlatformId) -> Self {
        Self::with_policy(platform, subscription_tier)
    }

    /// Construct with an injected entitlement policy. The tier is computed
    /// exactly once here and never revisited.
    pub fn with_policy(platform: PlatformId, policy: AccessPolicy) -> Self {
        let tier = policy(&platform);
        let phase = match tier {
            AccessTier::Premium => Phase::Blocked,
            AccessTier::Standard => Phase::Editing {
                draft: AdDraft::for_platform(&platform),
            },
        };
        Self {
            platform,
            tier,
            phase,
        }
    }

    pub fn platform(&self) -> &PlatformId {
        &self.platform
    }

    pub fn tier(&self) -> AccessTier {
        self.tier
    }

    pub fn state(&self) -> FormState {
        match self.phase {
            Phase::Blocked => FormState::Blocked,
            Phase::Editing { .. } => FormState::Editing,
            Phase::Submitted { .. } => FormState::Submitted,
        }
    }

    /// The draft, if one exists (`Editing` or `Submitted`).
    pub fn draft(&self) -> Option<&AdDraft> {
        match &self.phase {
            Phase::Blocked => None,
            Phase::Editing { draft } | Phase::Submitted { draft } => Some(draft),
        }
    }

    /// Active schema variant; `None` while blocked.
    pub fn schema(&self) -> Option<SchemaKind> {
        self.draft().map(AdDraft::schema)
    }

    /// Current value of a field for input binding. Empty for fields outside
    /// the active schema or while blocked.
    pub fn field_value(&self, field: AdField) -> &str {
        let Some(draft) = self.draft() else {
            return "";
        };
        let common = draft.common();
        match field {
            AdField::Name => &common.name,
            AdField::Headline => &common.headline,
            AdField::Description => &common.description,
            AdField::TargetUrl => &common.target_url,
            AdField::Budget => &common.budget,
            AdField::StartDate => &common.start_date,
            AdField::EndDate => &common.end_date,
            AdField::Keywords => match draft {
                AdDraft::Google(google) => &google.keywords,
                AdDraft::Meta(_) => "",
            },
            AdField::AdType => match draft {
                AdDraft::Google(google) => &google.ad_type,
                AdDraft::Meta(_) => "",
            },
            AdField::Platform => match draft {
                AdDraft::Meta(meta) => &meta.platform,
                AdDraft::Google(_) => "",
            },
            AdField::Objective => match draft {
                AdDraft::Meta(meta) => &meta.objective,
                AdDraft::Google(_) => "",
            },
            AdField::Placement => match draft {
                AdDraft::Meta(meta) => &meta.placement,
                AdDraft::Google(_) => "",
            },
        }
    }

    /// Update one field. Only allowed while `Editing`; in any other state the
    /// call is an observable no-op, as are updates to fields the active
    /// schema does not carry.
    pub fn set_field(&mut self, field: AdField, value: &str) {
        let Phase::Editing { draft } = &mut self.phase else {
            return;
        };
        let common = draft.common_mut();
        match field {
            AdField::Name => common.name = value.to_string(),
            AdField::Headline => common.headline = value.to_string(),
            AdField::Description => common.description = value.to_string(),
            AdField::TargetUrl => common.target_url = value.to_string(),
            AdField::Budget => common.budget = value.to_string(),
            AdField::StartDate => common.start_date = value.to_string(),
            AdField::EndDate => common.end_date = value.to_string(),
            AdField::Keywords => {
                if let AdDraft::Google(google) = draft {
                    google.keywords = value.to_string();
                }
            }
            AdField::AdType => {
                if let AdDraft::Google(google) = draft {
                    google.ad_type = value.to_string();
                }
            }
            AdField::Platform => {
                if let AdDraft::Meta(meta) = draft {
                    meta.platform = value.to_string();
                }
            }
            AdField::Objective => {
                if let AdDraft::Meta(meta) = draft {
                    meta.objective = value.to_string();
                }
            }
            AdField::Placement => {
                if let AdDraft::Meta(meta) = draft {
                    meta.placement = value.to_string();
                }
            }
        }
    }

    /// Run the active schema over the draft, collecting every failure.
    /// Outside `Editing` there is nothing to check and the result is clean.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        match &self.phase {
            Phase::Editing { draft } => validate(draft),
            _ => Ok(()),
        }
    }

    /// Try to finalize the form. On a clean validation pass the controller
    /// moves to the terminal `Submitted` state and returns the submission for
    /// the notification and navigation collaborators. A failed pass leaves
    /// the state untouched and returns the field errors; calls outside
    /// `Editing` are rejected without errors.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        let Phase::Editing { draft } = &self.phase else {
            return Err(FieldErrors::default());
        };
        validate(draft)?;

        let accepted = draft.clone();
        self.phase = Phase::Submitted {
            draft: accepted.clone(),
        };
        Ok(Submission {
            id: Uuid::new_v4(),
            draft: accepted,
            redirect_to: self.platform.dashboard_route(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::validate::FieldErrorKind;

    fn fill_valid_google(controller: &mut AdFormController) {
        controller.set_field(AdField::Name, "AB");
        controller.set_field(AdField::Headline, "Hello World");
        controller.set_field(AdField::Description, "A sufficiently long description");
        controller.set_field(AdField::TargetUrl, "https://example.com");
        controller.set_field(AdField::Budget, "100");
        controller.set_field(AdField::StartDate, "2024-01-01");
        controller.set_field(AdField::Keywords, "ads");
        controller.set_field(AdField::AdType, "search");
    }

    #[test]
    fn premium_platforms_start_blocked() {
        for platform in [
            PlatformId::LinkedIn,
            PlatformId::TikTok,
            PlatformId::Snapchat,
        ] {
            let controller = AdFormController::new(platform);
            assert_eq!(controller.state(), FormState::Blocked);
            assert_eq!(controller.tier(), AccessTier::Premium);
            assert!(controller.draft().is_none());
        }
    }

    #[test]
    fn schema_selection_and_fallback() {
        let google = AdFormController::new(PlatformId::GoogleAds);
        assert_eq!(google.state(), FormState::Editing);
        assert_eq!(google.schema(), Some(SchemaKind::Google));

        let meta = AdFormController::new(PlatformId::MetaAds);
        assert_eq!(meta.schema(), Some(SchemaKind::Meta));

        // Unknown platforms are accepted: Meta schema, standard tier
        let odd = AdFormController::new(PlatformId::Other("pinterest".to_string()));
        assert_eq!(odd.state(), FormState::Editing);
        assert_eq!(odd.tier(), AccessTier::Standard);
        assert_eq!(odd.schema(), Some(SchemaKind::Meta));
    }

    #[test]
    fn injected_policy_overrides_the_allow_list() {
        fn everything_is_premium(_: &PlatformId) -> AccessTier {
            AccessTier::Premium
        }
        let controller =
            AdFormController::with_policy(PlatformId::GoogleAds, everything_is_premium);
        assert_eq!(controller.state(), FormState::Blocked);
    }

    #[test]
    fn fresh_form_reports_all_missing_fields_together() {
        let controller = AdFormController::new(PlatformId::GoogleAds);
        let errors = controller.validate().unwrap_err();
        for field in [
            AdField::Name,
            AdField::Headline,
            AdField::Description,
            AdField::TargetUrl,
            AdField::Budget,
            AdField::Keywords,
        ] {
            assert!(errors.get(field).is_some(), "expected error on {:?}", field);
        }
        // start date defaults to today, so it passes
        assert_eq!(errors.get(AdField::StartDate), None);
    }

    #[test]
    fn valid_submit_carries_the_exact_values() {
        let mut controller = AdFormController::new(PlatformId::GoogleAds);
        fill_valid_google(&mut controller);
        assert!(controller.validate().is_ok());

        let submission = controller.submit().expect("clean form must submit");
        assert_eq!(controller.state(), FormState::Submitted);
        assert_eq!(submission.redirect_to, "/dashboard/google-ads");

        let AdDraft::Google(google) = &submission.draft else {
            panic!("expected google variant");
        };
        assert_eq!(google.common.name, "AB");
        assert_eq!(google.common.headline, "Hello World");
        assert_eq!(google.common.description, "A sufficiently long description");
        assert_eq!(google.common.target_url, "https://example.com");
        assert_eq!(google.common.budget, "100");
        assert_eq!(google.common.start_date, "2024-01-01");
        assert_eq!(google.keywords, "ads");
        assert_eq!(google.ad_type, "search");
    }

    #[test]
    fn rejected_submit_stays_editing() {
        let mut controller = AdFormController::new(PlatformId::MetaAds);
        controller.set_field(AdField::TargetUrl, "not-a-url");
        let errors = controller.submit().unwrap_err();
        assert_eq!(
            errors.get(AdField::TargetUrl),
            Some(FieldErrorKind::InvalidUrl)
        );
        assert_eq!(controller.state(), FormState::Editing);
    }

    #[test]
    fn set_field_is_a_no_op_in_terminal_states() {
        let mut blocked = AdFormController::new(PlatformId::TikTok);
        blocked.set_field(AdField::Name, "ignored");
        assert!(blocked.draft().is_none());

        let mut submitted = AdFormController::new(PlatformId::GoogleAds);
        fill_valid_google(&mut submitted);
        submitted.submit().expect("clean form must submit");
        let before = submitted.draft().cloned();
        submitted.set_field(AdField::Name, "changed");
        assert_eq!(submitted.draft().cloned(), before);
        // a second submit is rejected without errors
        assert!(submitted.submit().unwrap_err().is_empty());
        assert_eq!(submitted.state(), FormState::Submitted);
    }

    #[test]
    fn fields_outside_the_active_schema_are_ignored() {
        let mut meta = AdFormController::new(PlatformId::MetaAds);
        meta.set_field(AdField::Keywords, "should vanish");
        assert_eq!(meta.field_value(AdField::Keywords), "");
        meta.set_field(AdField::Platform, "instagram");
        assert_eq!(meta.field_value(AdField::Platform), "instagram");
    }

    #[test]
    fn submitted_draft_round_trips_through_serde() {
        let mut controller = AdFormController::new(PlatformId::GoogleAds);
        fill_valid_google(&mut controller);
        let submission = controller.submit().expect("clean form must submit");

        let json = serde_json::to_string(&submission.draft).unwrap();
        let restored: AdDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, submission.draft);
    }
}
