//! The dashboard's static navigation tree.

use super::menu::MenuNode;
use crate::config::HOME_PATH;
use crate::pages::sections::Section;

fn section_item(slug: &str) -> Option<MenuNode> {
    let section = Section::find(slug)?;
    Some(
        MenuNode::group(
            section.title,
            vec![
                MenuNode::item(format!("All {}", section.title.to_lowercase()), section.path())
                    .key(section.list_key()),
                MenuNode::item(format!("Add {}", section.entity.to_lowercase()), section.add_path())
                    .key(section.add_key()),
            ],
        )
        .key(section.list_key())
        .icon(section.icon),
    )
}

fn section_items(slugs: &[&str]) -> Vec<MenuNode> {
    slugs.iter().filter_map(|slug| section_item(slug)).collect()
}

pub fn network_menu() -> Vec<MenuNode> {
    let mut nodes = vec![
        MenuNode::heading("Overview"),
        MenuNode::item("Dashboard", HOME_PATH).icon("home"),
        MenuNode::heading("Network"),
    ];
    nodes.extend(section_items(&["businesses", "offers", "reservations"]));
    nodes.push(
        MenuNode::group(
            "Catalog",
            section_items(&["zones", "cities", "currencies", "categories"]),
        )
        .icon("layers"),
    );
    nodes.push(MenuNode::heading("Administration"));
    nodes.push(
        MenuNode::group("Access", section_items(&["teams", "users"]))
            .key("administration")
            .icon("lock"),
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::menu::filter_menu;
    use crate::system::auth::permissions::PermissionStore;
    use contracts::system::auth::PermissionRecord;

    #[test]
    fn test_every_section_reachable() {
        let menu = network_menu();
        let mut paths = Vec::new();
        fn collect(nodes: &[MenuNode], out: &mut Vec<String>) {
            for node in nodes {
                out.extend(node.path.clone());
                collect(&node.children, out);
            }
        }
        collect(&menu, &mut paths);
        for section in crate::pages::sections::SECTIONS {
            assert!(paths.contains(&section.path()), "{} missing from menu", section.slug);
        }
    }

    #[test]
    fn test_add_entry_needs_add_key() {
        let store = PermissionStore::resolved([
            PermissionRecord::new("all-offers", ["menu"]),
            PermissionRecord::new("add-Offer", ["menu"]),
        ]);
        let filtered = filter_menu(&network_menu(), &store, "menu");
        let offers = filtered.iter().find(|node| node.title == "Offers").unwrap();
        let paths: Vec<_> = offers.children.iter().filter_map(|n| n.path.as_deref()).collect();
        assert_eq!(paths, ["/offers", "/offers/add"]);
    }

    #[test]
    fn test_administration_needs_group_key() {
        let store = PermissionStore::resolved([PermissionRecord::new("all-users", ["menu"])]);
        let filtered = filter_menu(&network_menu(), &store, "menu");
        assert!(filtered.iter().all(|node| node.title != "Access"));

        let store = PermissionStore::resolved([
            PermissionRecord::new("all-users", ["menu"]),
            PermissionRecord::new("administration", ["menu"]),
        ]);
        let filtered = filter_menu(&network_menu(), &store, "menu");
        let access = filtered.iter().find(|node| node.title == "Access").unwrap();
        assert_eq!(access.children.len(), 1);
        assert_eq!(access.children[0].title, "Users");
        assert_eq!(access.children[0].children.len(), 1);
        assert_eq!(access.children[0].children[0].title, "All users");
    }
}
