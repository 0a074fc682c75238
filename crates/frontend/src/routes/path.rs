//! Route pattern matching used to resolve the active menu item.
//!
//! Patterns are `/`-separated. A `:name` segment matches any single
//! non-empty segment, a trailing `*` matches whatever remains (including
//! nothing). Trailing slashes are ignored on both sides.

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Strips the query string and fragment from a location.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

pub fn path_matches(pattern: &str, path: &str) -> bool {
    let mut expected = segments(pattern).peekable();
    let mut actual = segments(strip_query(path));

    while let Some(want) = expected.next() {
        if want == "*" && expected.peek().is_none() {
            return true;
        }
        match actual.next() {
            Some(got) if want.starts_with(':') || want == got => {}
            _ => return false,
        }
    }
    actual.next().is_none()
}

/// Whether `path` is `prefix` or lies below it.
pub fn is_within(prefix: &str, path: &str) -> bool {
    let mut expected = segments(prefix);
    let mut actual = segments(strip_query(path));
    expected.all(|want| actual.next() == Some(want))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert!(path_matches("/users", "/users"));
        assert!(path_matches("/users/", "/users"));
        assert!(path_matches("/users", "/users/?page=2"));
        assert!(!path_matches("/users", "/users/add"));
        assert!(!path_matches("/users/add", "/users"));
        assert!(!path_matches("/users", "/offers"));
    }

    #[test]
    fn test_root() {
        assert!(path_matches("/", "/"));
        assert!(path_matches("/", ""));
        assert!(!path_matches("/", "/users"));
    }

    #[test]
    fn test_params() {
        assert!(path_matches("/offers/:id", "/offers/42"));
        assert!(path_matches("/offers/:id/edit", "/offers/42/edit"));
        assert!(!path_matches("/offers/:id", "/offers"));
        assert!(!path_matches("/offers/:id", "/offers/42/edit"));
    }

    #[test]
    fn test_wildcard() {
        assert!(path_matches("/reservations/*", "/reservations"));
        assert!(path_matches("/reservations/*", "/reservations/7/history"));
        assert!(!path_matches("/reservations/*", "/offers/7"));
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/users", "/users"));
        assert!(is_within("/users", "/users/add"));
        assert!(!is_within("/users", "/users-archive"));
        assert!(is_within("/", "/anything"));
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/login?redirect=%2Fusers"), "/login");
        assert_eq!(strip_query("/zones#top"), "/zones");
        assert_eq!(strip_query("/zones"), "/zones");
    }
}
