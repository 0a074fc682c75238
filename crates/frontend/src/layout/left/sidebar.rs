//! Sidebar with collapsible menu groups, built from the filtered menu tree.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::menu::{active_trail, use_menus, MenuNode};
use crate::layout::settings::use_settings;
use crate::shared::icons::icon;

#[derive(Clone, Copy)]
struct SidebarState {
    expanded: RwSignal<Vec<String>>,
    active_id: Memo<Option<String>>,
    collapsed: Signal<bool>,
}

impl SidebarState {
    fn toggle(&self, id: &str) {
        self.expanded.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == id) {
                items.remove(pos);
            } else {
                items.push(id.to_string());
            }
        });
    }
}

fn render_nodes(nodes: Vec<MenuNode>, depth: usize, state: SidebarState) -> AnyView {
    nodes
        .into_iter()
        .map(|node| render_node(node, depth, state))
        .collect_view()
        .into_any()
}

fn render_node(node: MenuNode, depth: usize, state: SidebarState) -> AnyView {
    if node.heading {
        return view! {
            <div class="app-sidebar__heading" class:hidden=move || state.collapsed.get()>
                {node.title}
            </div>
        }
        .into_any();
    }

    let id = node.id().to_string();
    let padding = format!("{}px", 12 + depth * 10);
    let icon_view = node.icon.map(icon);
    let title = node.title.clone();
    let tooltip = node.title.clone();

    if !node.has_children() {
        let navigate = use_navigate();
        let path = node.path.clone();
        let is_active = {
            let id = id.clone();
            move || state.active_id.get().as_deref() == Some(id.as_str())
        };
        return view! {
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                style:padding-left=padding
                title=tooltip
                on:click=move |_| {
                    if let Some(path) = path.as_deref() {
                        navigate(path, NavigateOptions::default());
                    }
                }
            >
                <div class="app-sidebar__item-content">
                    {icon_view}
                    <span class:hidden=move || state.collapsed.get()>{title}</span>
                </div>
            </div>
        }
        .into_any();
    }

    let is_expanded = {
        let id = id.clone();
        move || state.expanded.with(|items| items.contains(&id))
    };
    let children = StoredValue::new(node.children);

    view! {
        <div>
            <div
                class="app-sidebar__item"
                style:padding-left=padding
                title=tooltip
                on:click=move |_| state.toggle(&id)
            >
                <div class="app-sidebar__item-content">
                    {icon_view}
                    <span class:hidden=move || state.collapsed.get()>{title}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded.clone()
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {render_nodes(children.get_value(), depth + 1, state)}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let menus = use_menus();
    let settings = use_settings();
    let location = use_location();

    let active_ids = Memo::new(move |_| {
        let path = location.pathname.get();
        menus.items.with(|items| {
            active_trail(items, &path)
                .into_iter()
                .map(|node| node.id().to_string())
                .collect::<Vec<_>>()
        })
    });

    let state = SidebarState {
        expanded: RwSignal::new(Vec::new()),
        active_id: Memo::new(move |_| active_ids.with(|ids| ids.last().cloned())),
        collapsed: Signal::derive(move || settings.settings.get().sidebar_collapsed),
    };

    // Keep the groups leading to the current page open.
    Effect::new(move |_| {
        let ids = active_ids.get();
        state.expanded.update(|items| {
            for id in ids {
                if !items.contains(&id) {
                    items.push(id);
                }
            }
        });
    });

    view! {
        <div class="app-sidebar__content">
            {move || render_nodes(menus.items.get(), 0, state)}
        </div>
    }
}
