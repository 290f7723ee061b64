use serde::{Deserialize, Serialize};

use crate::platform::PlatformId;

/// Steps of the first-run wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStep {
    Welcome,
    Sources,
    Preferences,
    Complete,
}

impl OnboardingStep {
    pub fn all() -> [OnboardingStep; 4] {
        [
            OnboardingStep::Welcome,
            OnboardingStep::Sources,
            OnboardingStep::Preferences,
            OnboardingStep::Complete,
        ]
    }

    /// 1-based position for the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::Welcome => 1,
            OnboardingStep::Sources => 2,
            OnboardingStep::Preferences => 3,
            OnboardingStep::Complete => 4,
        }
    }
}

/// How often scheduled reports are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportFrequency {
    Weekly,
    Monthly,
    Quarterly,
}

impl ReportFrequency {
    pub fn all() -> [ReportFrequency; 3] {
        [
            ReportFrequency::Weekly,
            ReportFrequency::Monthly,
            ReportFrequency::Quarterly,
        ]
    }
}

/// Which dashboard the user lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultView {
    Overview,
    Performance,
    Campaigns,
}

impl DefaultView {
    pub fn all() -> [DefaultView; 3] {
        [
            DefaultView::Overview,
            DefaultView::Performance,
            DefaultView::Campaigns,
        ]
    }
}

/// Client-local state of the onboarding wizard. Strictly forward-only; once
/// `Complete` is reached no further transitions happen and the user leaves
/// for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingFlow {
    step: OnboardingStep,
    pub connected_sources: Vec<PlatformId>,
    pub report_frequency: ReportFrequency,
    pub default_view: DefaultView,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            connected_sources: Vec::new(),
            report_frequency: ReportFrequency::Weekly,
            default_view: DefaultView::Overview,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    /// Move to the next step; a no-op once complete.
    pub fn advance(&mut self) {
        self.step = match self.step {
            OnboardingStep::Welcome => OnboardingStep::Sources,
            OnboardingStep::Sources => OnboardingStep::Preferences,
            OnboardingStep::Preferences => OnboardingStep::Complete,
            OnboardingStep::Complete => OnboardingStep::Complete,
        };
    }

    /// Record a connected data source; repeat connections are collapsed.
    pub fn connect_source(&mut self, platform: PlatformId) {
        if !self.connected_sources.contains(&platform) {
            self.connected_sources.push(platform);
        }
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_steps_in_order() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.step(), OnboardingStep::Welcome);
        flow.advance();
        assert_eq!(flow.step(), OnboardingStep::Sources);
        flow.advance();
        assert_eq!(flow.step(), OnboardingStep::Preferences);
        flow.advance();
        assert_eq!(flow.step(), OnboardingStep::Complete);
        assert!(flow.is_complete());
        flow.advance();
        assert_eq!(flow.step(), OnboardingStep::Complete);
    }

    #[test]
    fn defaults_match_the_completion_screen() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.report_frequency, ReportFrequency::Weekly);
        assert_eq!(flow.default_view, DefaultView::Overview);
    }

    #[test]
    fn repeat_connections_are_collapsed() {
        let mut flow = OnboardingFlow::new();
        flow.connect_source(PlatformId::GoogleAds);
        flow.connect_source(PlatformId::MetaAds);
        flow.connect_source(PlatformId::GoogleAds);
        assert_eq!(flow.connected_sources.len(), 2);
    }
}
