//! Shared domain contracts of the S-EYE dashboard: platform identifiers and
//! access tiers, the ad-creation form state machine, the onboarding flow and
//! the display DTOs the frontend binds its sample data to.

pub mod ads;
pub mod analytics;
pub mod clients;
pub mod onboarding;
pub mod platform;
