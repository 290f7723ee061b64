use serde::{Deserialize, Serialize};

/// Advertising channel resolved from the dashboard route segment.
///
/// Route segments the sidebar never produces are still accepted and kept
/// verbatim in `Other`; downstream they take the Meta-schema, standard-tier
/// branch, matching the original application's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformId {
    GoogleAds,
    MetaAds,
    LinkedIn,
    TikTok,
    Snapchat,
    Other(String),
}

impl PlatformId {
    /// Parse a platform from its URL segment, e.g. "google-ads".
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "google-ads" => PlatformId::GoogleAds,
            "meta-ads" => PlatformId::MetaAds,
            "linkedin" => PlatformId::LinkedIn,
            "tiktok" => PlatformId::TikTok,
            "snapchat" => PlatformId::Snapchat,
            other => PlatformId::Other(other.to_string()),
        }
    }

    /// URL segment used in dashboard routes.
    pub fn as_segment(&self) -> &str {
        match self {
            PlatformId::GoogleAds => "google-ads",
            PlatformId::MetaAds => "meta-ads",
            PlatformId::LinkedIn => "linkedin",
            PlatformId::TikTok => "tiktok",
            PlatformId::Snapchat => "snapchat",
            PlatformId::Other(segment) => segment,
        }
    }

    /// Human-readable channel name.
    pub fn display_name(&self) -> &str {
        match self {
            PlatformId::GoogleAds => "Google Ads",
            PlatformId::MetaAds => "Meta Ads",
            PlatformId::LinkedIn => "LinkedIn Ads",
            PlatformId::TikTok => "TikTok Ads",
            PlatformId::Snapchat => "Snapchat Ads",
            PlatformId::Other(segment) => segment,
        }
    }

    /// The five channels the sidebar knows about, in display order.
    pub fn known() -> Vec<PlatformId> {
        vec![
            PlatformId::GoogleAds,
            PlatformId::MetaAds,
            PlatformId::LinkedIn,
            PlatformId::TikTok,
            PlatformId::Snapchat,
        ]
    }

    /// Route of this channel's dashboard page.
    pub fn dashboard_route(&self) -> String {
        format!("/dashboard/{}", self.as_segment())
    }
}

impl From<String> for PlatformId {
    fn from(value: String) -> Self {
        PlatformId::from_segment(&value)
    }
}

impl From<PlatformId> for String {
    fn from(value: PlatformId) -> Self {
        value.as_segment().to_string()
    }
}

/// Subscription level gating ad creation on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessTier {
    Standard,
    Premium,
}

/// Decides the tier for a platform. Injected into the form controller so the
/// static allow-list can later be swapped for a real entitlement service
/// without touching the state machine.
pub type AccessPolicy = fn(&PlatformId) -> AccessTier;

/// Default policy: the static premium allow-list of the original product.
pub fn subscription_tier(platform: &PlatformId) -> AccessTier {
    match platform {
        PlatformId::LinkedIn | PlatformId::TikTok | PlatformId::Snapchat => AccessTier::Premium,
        _ => AccessTier::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_round_trip() {
        for platform in PlatformId::known() {
            assert_eq!(PlatformId::from_segment(platform.as_segment()), platform);
        }
        let odd = PlatformId::from_segment("pinterest");
        assert_eq!(odd, PlatformId::Other("pinterest".to_string()));
        assert_eq!(odd.as_segment(), "pinterest");
    }

    #[test]
    fn premium_allow_list() {
        assert_eq!(subscription_tier(&PlatformId::LinkedIn), AccessTier::Premium);
        assert_eq!(subscription_tier(&PlatformId::TikTok), AccessTier::Premium);
        assert_eq!(subscription_tier(&PlatformId::Snapchat), AccessTier::Premium);
        assert_eq!(subscription_tier(&PlatformId::GoogleAds), AccessTier::Standard);
        assert_eq!(subscription_tier(&PlatformId::MetaAds), AccessTier::Standard);
        assert_eq!(
            subscription_tier(&PlatformId::Other("pinterest".to_string())),
            AccessTier::Standard
        );
    }

    #[test]
    fn serde_uses_segments() {
        let json = serde_json::to_string(&PlatformId::GoogleAds).unwrap();
        assert_eq!(json, "\"google-ads\"");
        let back: PlatformId = serde_json::from_str("\"tiktok\"").unwrap();
        assert_eq!(back, PlatformId::TikTok);
    }
}
