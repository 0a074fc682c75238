use leptos::prelude::*;
use leptos_router::components::A;

use super::sections::SECTIONS;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::gate::PermissionGuard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.user()
            .get()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <div class="page">
            <div class="page__toolbar">
                <h1>{greeting}</h1>
            </div>
            <div class="page__content dashboard-cards">
                {SECTIONS.iter().map(|section| view! {
                    <PermissionGuard permission_key=section.list_key() action="list">
                        <div class="dashboard-card">
                            <A href=section.path()>
                                {icon(section.icon)}
                                <span>{section.title}</span>
                            </A>
                        </div>
                    </PermissionGuard>
                }).collect_view()}
            </div>
        </div>
    }
}
