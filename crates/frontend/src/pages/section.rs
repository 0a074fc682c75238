use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::sections::Section;
use super::NotFound;
use crate::layout::left::menu::{find_children, use_menus};
use crate::shared::icons::icon;
use crate::system::auth::gate::{use_can, PermissionGuard};
use crate::system::auth::guard::with_permission;

/// Section resolved from the `:section` route parameter.
fn use_section() -> Memo<Option<&'static Section>> {
    let params = use_params_map();
    Memo::new(move |_| {
        params
            .with(|p| p.get("section"))
            .and_then(|slug| Section::find(&slug))
    })
}

/// `/:section` — list page, guarded by the section's list key.
#[component]
pub fn SectionRoute() -> impl IntoView {
    let section = use_section();

    // Re-created per section, so each page instance gets its own guard.
    move || match section.get() {
        Some(section) => with_permission(
            move || view! { <SectionListPage section=section /> },
            section.list_key(),
            "list",
        )(),
        None => view! { <NotFound /> }.into_any(),
    }
}

/// `/:section/add` — create page, guarded by the section's add key.
#[component]
pub fn SectionAddRoute() -> impl IntoView {
    let section = use_section();

    move || match section.get() {
        Some(section) => with_permission(
            move || view! { <SectionAddPage section=section /> },
            section.add_key(),
            "add",
        )(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn SectionListPage(section: &'static Section) -> impl IntoView {
    let menus = use_menus();
    let can_edit = use_can(section.list_key(), "edit");
    let group = section.list_key();

    let related = move || {
        menus.items.with(|items| {
            find_children(items, &group)
                .iter()
                .filter_map(|node| Some((node.title.clone(), node.path.clone()?)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <div class="page__toolbar">
                <h1>{icon(section.icon)} {section.title}</h1>
                <PermissionGuard permission_key=section.add_key() action="add">
                    <A href=section.add_path()>
                        {icon("plus")}
                        {format!("Add {}", section.entity)}
                    </A>
                </PermissionGuard>
                <PermissionGuard
                    permission_key=section.add_key()
                    action="add"
                    show_if_no_permission=true
                >
                    <span class="page__badge">"Read-only"</span>
                </PermissionGuard>
            </div>

            <div class="page__container">
                <div class="page__content">
                    <p>
                        {move || if can_edit.get() {
                            "Select a record to view or edit it."
                        } else {
                            "Select a record to view it."
                        }}
                    </p>
                    <ul class="page__related">
                        {move || related().into_iter().map(|(title, href)| view! {
                            <li><A href=href>{title}</A></li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectionAddPage(section: &'static Section) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__toolbar">
                <h1>{icon(section.icon)} {format!("New {}", section.entity)}</h1>
                <A href=section.path()>"Back to list"</A>
            </div>
            <div class="page__container">
                <div class="page__content">
                    <p>{format!("Fill in the {} details and save.", section.entity.to_lowercase())}</p>
                </div>
            </div>
        </div>
    }
}
