use contracts::platform::PlatformId;
use leptos::prelude::*;
use web_sys::window;

use crate::ads::ui::details::AdCreatePage;
use crate::clients::ui::list::ClientListPage;
use crate::dashboard::overview::DashboardOverview;
use crate::dashboard::platform::PlatformDashboard;
use crate::layout::DashboardShell;
use crate::reports::ui::funnel::AttributionReportPage;
use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::onboarding::OnboardingPage;
use crate::system::pages::signup::SignupPage;
use crate::system::session::use_session;

// ============================================================================
// Route table
// ============================================================================

/// Every page the application can show. Dashboard segments that are not one
/// of the reserved words resolve to a platform page; unknown platform names
/// are accepted on purpose and ride the Meta-schema fallback downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Onboarding,
    Dashboard,
    Platform(PlatformId),
    CreateAd(PlatformId),
    Reports,
    Team,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["onboarding"] => Route::Onboarding,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "reports"] => Route::Reports,
            ["dashboard", "team"] => Route::Team,
            ["dashboard", platform] => Route::Platform(PlatformId::from_segment(platform)),
            ["dashboard", platform, "create-ad"] => {
                Route::CreateAd(PlatformId::from_segment(platform))
            }
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Platform(platform) => platform.dashboard_route(),
            Route::CreateAd(platform) => {
                format!("{}/create-ad", platform.dashboard_route())
            }
            Route::Reports => "/dashboard/reports".to_string(),
            Route::Team => "/dashboard/team".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Routes living inside the dashboard shell (sidebar + header).
    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Platform(_)
                | Route::CreateAd(_)
                | Route::Reports
                | Route::Team
        )
    }
}

// ============================================================================
// Router service
// ============================================================================

/// Minimal history-backed router. The current route is a signal; navigation
/// pushes a history entry and updates it.
#[derive(Clone, Copy)]
pub struct RouterService {
    pub current: RwSignal<Route>,
}

impl RouterService {
    pub fn new() -> Self {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self {
            current: RwSignal::new(Route::parse(&path)),
        }
    }

    pub fn navigate(&self, route: Route) {
        if self.current.with_untracked(|current| *current == route) {
            return;
        }
        let path = route.to_path();
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&path),
                );
            }
        }
        self.current.set(route);
    }

    /// Navigate by raw path, for collaborators that hand back a route string
    /// (e.g. the form controller's submit redirect).
    pub fn navigate_path(&self, path: &str) {
        self.navigate(Route::parse(path));
    }
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService not found in context")
}

// ============================================================================
// Route dispatch
// ============================================================================

#[component]
fn DashboardPage(route: Route) -> impl IntoView {
    match route {
        Route::Dashboard => view! { <DashboardOverview /> }.into_any(),
        Route::Platform(platform) => {
            view! { <PlatformDashboard platform=platform /> }.into_any()
        }
        Route::CreateAd(platform) => view! { <AdCreatePage platform=platform /> }.into_any(),
        Route::Reports => view! { <AttributionReportPage /> }.into_any(),
        Route::Team => view! { <ClientListPage /> }.into_any(),
        _ => view! { <DashboardOverview /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();
    let session = use_session();

    view! {
        {move || {
            let route = router.current.get();
            if route.is_dashboard() {
                // Dashboard routes require the demo session
                if !session.signed_in.get() {
                    return view! { <LoginPage /> }.into_any();
                }
                let inner = route.clone();
                return view! {
                    <DashboardShell>
                        <DashboardPage route=inner />
                    </DashboardShell>
                }
                .into_any();
            }
            match route {
                Route::Landing => view! { <LandingPage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Signup => view! { <SignupPage /> }.into_any(),
                Route::Onboarding => view! { <OnboardingPage /> }.into_any(),
                Route::NotFound(_) => view! { <LandingPage /> }.into_any(),
                _ => view! { <LandingPage /> }.into_any(),
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_route_table() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard/reports"), Route::Reports);
        assert_eq!(Route::parse("/dashboard/team"), Route::Team);
        assert_eq!(
            Route::parse("/dashboard/google-ads"),
            Route::Platform(PlatformId::GoogleAds)
        );
        assert_eq!(
            Route::parse("/dashboard/google-ads/create-ad"),
            Route::CreateAd(PlatformId::GoogleAds)
        );
        assert_eq!(
            Route::parse("/dashboard/pinterest"),
            Route::Platform(PlatformId::Other("pinterest".to_string()))
        );
        assert_eq!(
            Route::parse("/no/such/page"),
            Route::NotFound("/no/such/page".to_string())
        );
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Landing,
            Route::Login,
            Route::Signup,
            Route::Onboarding,
            Route::Dashboard,
            Route::Platform(PlatformId::MetaAds),
            Route::CreateAd(PlatformId::Other("pinterest".to_string())),
            Route::Reports,
            Route::Team,
        ] {
            assert_eq!(Route::parse(&route.to_path()), route);
        }
    }
}
