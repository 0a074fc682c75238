use leptos::prelude::*;

use crate::layout::settings::use_settings;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let settings = use_settings();
    let is_open = move || settings.settings.get().sidebar_open;
    let is_collapsed = move || settings.settings.get().sidebar_collapsed;

    view! {
        <div
            data-zone="left"
            class="left"
            class:hidden=move || !is_open()
            class:left--collapsed=is_collapsed
        >
            {children()}
        </div>
    }
}
