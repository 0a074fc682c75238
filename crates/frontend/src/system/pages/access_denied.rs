use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::HOME_PATH;
use crate::shared::icons::icon;

/// Inline fallback for pages the session may not open.
#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            {icon("lock")}
            <h2>"Access denied"</h2>
            <p>"Your account does not have permission to open this page."</p>
            <A href=HOME_PATH>"Back to dashboard"</A>
        </div>
    }
}
