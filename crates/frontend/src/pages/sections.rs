//! Registry of the network's managed sections.
//!
//! Every section gets a list page at `/{slug}` guarded by `all-{slug}` and
//! a create page at `/{slug}/add` guarded by `add-{Entity}`, matching the
//! permission keys the API hands out.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub slug: &'static str,
    pub title: &'static str,
    pub entity: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { slug: "businesses", title: "Businesses", entity: "Business", icon: "building" },
    Section { slug: "offers", title: "Offers", entity: "Offer", icon: "tag" },
    Section { slug: "reservations", title: "Reservations", entity: "Reservation", icon: "calendar" },
    Section { slug: "zones", title: "Zones", entity: "Zone", icon: "map" },
    Section { slug: "cities", title: "Cities", entity: "City", icon: "map-pin" },
    Section { slug: "currencies", title: "Currencies", entity: "Currency", icon: "dollar-sign" },
    Section { slug: "categories", title: "Categories", entity: "Category", icon: "layers" },
    Section { slug: "teams", title: "Teams", entity: "Team", icon: "users" },
    Section { slug: "users", title: "Users", entity: "User", icon: "user" },
];

impl Section {
    pub fn find(slug: &str) -> Option<&'static Section> {
        SECTIONS.iter().find(|section| section.slug == slug)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn add_path(&self) -> String {
        format!("/{}/add", self.slug)
    }

    /// Key guarding the section's list (and its menu entry).
    pub fn list_key(&self) -> String {
        format!("all-{}", self.slug)
    }

    /// Key guarding record creation.
    pub fn add_key(&self) -> String {
        format!("add-{}", self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let users = Section::find("users").unwrap();
        assert_eq!(users.list_key(), "all-users");
        assert_eq!(users.add_key(), "add-User");
        assert_eq!(users.add_path(), "/users/add");
    }

    #[test]
    fn test_unknown_section() {
        assert!(Section::find("invoices").is_none());
    }

    #[test]
    fn test_slugs_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|b| b.slug != a.slug));
        }
    }
}
