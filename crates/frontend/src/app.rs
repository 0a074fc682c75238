use crate::layout::settings::SettingsProvider;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notifications are shared by guards and forms across the whole app.
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <SettingsProvider>
                <AppRoutes />
            </SettingsProvider>
        </AuthProvider>
    }
}
