use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::left::menu::{breadcrumbs, use_menus};

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let menus = use_menus();
    let location = use_location();

    let trail = move || {
        let path = location.pathname.get();
        menus.items.with(|items| {
            breadcrumbs(items, &path)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            <nav class="breadcrumbs">
                {move || trail().into_iter().map(|title| view! {
                    <span class="breadcrumbs__item">{title}</span>
                }).collect_view()}
            </nav>
            {children()}
        </div>
    }
}
