mod header;
mod sidebar;

pub use header::DashboardHeader;
pub use sidebar::Sidebar;

use leptos::prelude::*;

/// Frame around every signed-in page: sidebar on the left, header on top,
/// page content in the scrollable main area.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <DashboardHeader />
                <main class="shell__content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
