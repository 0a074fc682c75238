use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::layout::left::menu::MenusProvider;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages::dashboard::DashboardPage;
use crate::pages::section::{SectionAddRoute, SectionRoute};
use crate::pages::NotFound;
use crate::shared::notifications::Notifications;
use crate::system::auth::guard::ProtectedRoute;
use crate::system::pages::login::LoginPage;

/// Layout for signed-in pages. Only requires a session; each page
/// guards its own permission.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <ProtectedRoute notify=false>
            <MenusProvider>
                <Shell
                    left=|| view! { <Sidebar /> }.into_any()
                    center=|| view! { <Outlet /> }.into_any()
                />
            </MenusProvider>
        </ProtectedRoute>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Notifications />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!(":section") view=SectionRoute />
                    <Route path=path!(":section/add") view=SectionAddRoute />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
