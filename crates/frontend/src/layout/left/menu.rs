//! Sidebar menu tree and its permission filtering.
//!
//! The tree is static configuration (see `menu_config`). Filtering and the
//! lookup helpers never mutate it; they return new nodes or borrow into it.

use leptos::prelude::*;

use super::menu_config::network_menu;
use crate::config::DEFAULT_ACTION;
use crate::routes::path::path_matches;
use crate::system::auth::context::use_permissions;
use crate::system::auth::permissions::PermissionStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuNode {
    pub title: String,
    pub path: Option<String>,
    pub key: Option<String>,
    pub icon: Option<&'static str>,
    pub children: Vec<MenuNode>,
    pub heading: bool,
}

impl MenuNode {
    /// Section heading. Always shown, never navigable.
    pub fn heading(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
            key: None,
            icon: None,
            children: Vec::new(),
            heading: true,
        }
    }

    pub fn item(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            heading: false,
            ..Self::heading(title)
        }
    }

    pub fn group(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            children,
            heading: false,
            ..Self::heading(title)
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn clone_shallow(&self) -> Self {
        Self {
            title: self.title.clone(),
            path: self.path.clone(),
            key: self.key.clone(),
            icon: self.icon,
            children: Vec::new(),
            heading: self.heading,
        }
    }

    /// Stable identifier for expand/collapse state.
    pub fn id(&self) -> &str {
        self.path
            .as_deref()
            .or(self.key.as_deref())
            .unwrap_or(&self.title)
    }
}

/// Prunes `nodes` down to what `store` grants for `action`.
///
/// Headings are kept as is. A leaf survives when its key (if any) is
/// granted. A parent survives only when its own key is granted and at
/// least one child survives. Sibling order is preserved.
pub fn filter_menu(nodes: &[MenuNode], store: &PermissionStore, action: &str) -> Vec<MenuNode> {
    let mut result = Vec::new();
    for node in nodes {
        if node.heading {
            result.push(node.clone());
            continue;
        }

        let main_ok = store.has_permission(node.key.as_deref(), action);
        if node.has_children() {
            let children = filter_menu(&node.children, store, action);
            if main_ok && !children.is_empty() {
                result.push(MenuNode {
                    children,
                    ..node.clone_shallow()
                });
            }
        } else if main_ok {
            result.push(node.clone());
        }
    }
    result
}

fn trail<'a>(nodes: &'a [MenuNode], path: &str, out: &mut Vec<&'a MenuNode>) -> bool {
    for node in nodes.iter().filter(|node| !node.heading) {
        out.push(node);
        if trail(&node.children, path, out) {
            return true;
        }
        if node
            .path
            .as_deref()
            .is_some_and(|pattern| path_matches(pattern, path))
        {
            return true;
        }
        out.pop();
    }
    false
}

/// Nodes from the top of the tree down to the deepest node whose path
/// pattern matches `path`. Empty when nothing matches.
pub fn active_trail<'a>(nodes: &'a [MenuNode], path: &str) -> Vec<&'a MenuNode> {
    let mut found = Vec::new();
    trail(nodes, path, &mut found);
    found
}

/// Deepest node whose path pattern matches `path`.
pub fn find_active<'a>(nodes: &'a [MenuNode], path: &str) -> Option<&'a MenuNode> {
    active_trail(nodes, path).last().copied()
}

/// Titles from the top of the tree down to the node matching `path`.
pub fn breadcrumbs<'a>(nodes: &'a [MenuNode], path: &str) -> Vec<&'a str> {
    active_trail(nodes, path)
        .into_iter()
        .map(|node| node.title.as_str())
        .collect()
}

/// Children of the first node identified by `id` (see [`MenuNode::id`]).
pub fn find_children<'a>(nodes: &'a [MenuNode], id: &str) -> &'a [MenuNode] {
    fn find<'a>(nodes: &'a [MenuNode], id: &str) -> Option<&'a MenuNode> {
        nodes
            .iter()
            .find_map(|node| (node.id() == id).then_some(node).or_else(|| find(&node.children, id)))
    }
    find(nodes, id).map(|node| node.children.as_slice()).unwrap_or(&[])
}

/// Menu tree visible to the current session.
#[derive(Clone, Copy)]
pub struct MenusContext {
    pub items: Memo<Vec<MenuNode>>,
}

/// Provides the permission-filtered menu, recomputed whenever the
/// permission store changes.
#[component]
pub fn MenusProvider(children: Children) -> impl IntoView {
    let store = use_permissions();
    let source = StoredValue::new(network_menu());

    let items = Memo::new(move |_| {
        let filtered = store.with(|store| {
            source.with_value(|nodes| filter_menu(nodes, store, DEFAULT_ACTION))
        });
        log::debug!("menu filtered: {} top-level entries", filtered.len());
        filtered
    });

    provide_context(MenusContext { items });

    children()
}

pub fn use_menus() -> MenusContext {
    use_context::<MenusContext>().expect("MenusProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::PermissionRecord;

    fn grants(keys: &[&str]) -> PermissionStore {
        PermissionStore::resolved(keys.iter().map(|key| PermissionRecord::new(*key, ["menu"])))
    }

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::heading("Network"),
            MenuNode::item("Dashboard", "/"),
            MenuNode::group(
                "Users",
                vec![
                    MenuNode::item("List", "/users").key("all-users"),
                    MenuNode::item("Add", "/users/add").key("add-User"),
                ],
            )
            .key("all-users"),
            MenuNode::item("Offers", "/offers").key("all-offers"),
            MenuNode::item("Zones", "/zones").key("all-zones"),
        ]
    }

    fn titles(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.title.as_str()).collect()
    }

    #[test]
    fn test_scenario_no_permissions() {
        let nodes = vec![
            MenuNode::heading("Network"),
            MenuNode::group("Users", vec![MenuNode::item("List", "/users").key("all-users")])
                .key("all-users"),
        ];
        let filtered = filter_menu(&nodes, &grants(&[]), "menu");
        assert_eq!(filtered, vec![MenuNode::heading("Network")]);
    }

    #[test]
    fn test_preserves_order() {
        let filtered = filter_menu(&tree(), &grants(&["all-zones", "all-offers"]), "menu");
        assert_eq!(titles(&filtered), ["Network", "Dashboard", "Offers", "Zones"]);
    }

    #[test]
    fn test_parent_needs_own_key_and_a_child() {
        // Child granted, parent key granted too: parent kept with one child.
        let filtered = filter_menu(&tree(), &grants(&["all-users"]), "menu");
        let users = &filtered[2];
        assert_eq!(users.title, "Users");
        assert_eq!(titles(&users.children), ["List"]);

        // Child granted, parent key not granted: dropped.
        let nodes = vec![MenuNode::group("Teams", vec![MenuNode::item("List", "/teams")]).key("all-teams")];
        assert!(filter_menu(&nodes, &grants(&[]), "menu").is_empty());
    }

    #[test]
    fn test_empty_parent_dropped_even_if_permitted() {
        let nodes = vec![MenuNode::group(
            "Currencies",
            vec![MenuNode::item("Add", "/currencies/add").key("add-Currency")],
        )
        .key("all-currencies")];
        assert!(filter_menu(&nodes, &grants(&["all-currencies"]), "menu").is_empty());
    }

    #[test]
    fn test_unkeyed_parent_with_surviving_child() {
        let nodes = vec![MenuNode::group(
            "Catalog",
            vec![
                MenuNode::item("Cities", "/cities").key("all-cities"),
                MenuNode::item("Zones", "/zones").key("all-zones"),
            ],
        )];
        let filtered = filter_menu(&nodes, &grants(&["all-zones"]), "menu");
        assert_eq!(titles(&filtered[0].children), ["Zones"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = grants(&["all-users", "all-offers"]);
        let once = filter_menu(&tree(), &store, "menu");
        let twice = filter_menu(&once, &store, "menu");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_untouched() {
        let nodes = tree();
        let _ = filter_menu(&nodes, &grants(&[]), "menu");
        assert_eq!(nodes, tree());
    }

    #[test]
    fn test_loading_shows_only_unrestricted() {
        let filtered = filter_menu(&tree(), &PermissionStore::loading(), "menu");
        assert_eq!(titles(&filtered), ["Network", "Dashboard"]);
    }

    #[test]
    fn test_action_respected() {
        let store = PermissionStore::resolved([PermissionRecord::new("all-offers", ["list"])]);
        assert!(filter_menu(&[MenuNode::item("Offers", "/offers").key("all-offers")], &store, "menu").is_empty());
    }

    #[test]
    fn test_find_active_prefers_deepest() {
        let nodes = tree();
        assert_eq!(find_active(&nodes, "/users/add").map(|n| n.title.as_str()), Some("Add"));
        assert_eq!(find_active(&nodes, "/zones?page=3").map(|n| n.title.as_str()), Some("Zones"));
        assert!(find_active(&nodes, "/nowhere").is_none());
    }

    #[test]
    fn test_breadcrumbs() {
        let nodes = tree();
        assert_eq!(breadcrumbs(&nodes, "/users"), ["Users", "List"]);
        assert_eq!(breadcrumbs(&nodes, "/offers"), ["Offers"]);
        assert!(breadcrumbs(&nodes, "/nowhere").is_empty());
    }

    #[test]
    fn test_find_children() {
        let nodes = tree();
        assert_eq!(titles(find_children(&nodes, "all-users")), ["List", "Add"]);
        assert!(find_children(&nodes, "/offers").is_empty());
        assert!(find_children(&nodes, "missing").is_empty());
    }
}
