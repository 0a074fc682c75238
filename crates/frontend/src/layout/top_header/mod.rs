//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and density buttons
//! - Application title
//! - Signed-in user and logout

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::layout::settings::use_settings;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let settings = use_settings();
    let auth = use_auth();
    let navigate = use_navigate();

    let is_sidebar_visible = move || settings.settings.get().sidebar_open;

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            do_logout(auth).await;
            navigate(LOGIN_PATH, NavigateOptions::default());
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| settings.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Network Admin"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| settings.toggle_collapsed()
                    title="Compact navigation"
                >
                    {icon("layers")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth.user().get()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
