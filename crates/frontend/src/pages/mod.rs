//! Pages of the dashboard. Business records themselves are served and
//! edited through the network API; these pages compose the toolbar,
//! container and content block around them.

pub mod dashboard;
pub mod section;
pub mod sections;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Page not found"</h2>
            <A href=HOME_PATH>"Back to dashboard"</A>
        </div>
    }
}
