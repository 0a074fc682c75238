//! Application-wide constants.

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Landing page after login when no redirect target was requested.
pub const HOME_PATH: &str = "/";

/// Query parameter carrying the originally requested path through login.
pub const REDIRECT_PARAM: &str = "redirect";

/// Action checked by gates and menu filtering when none is given.
pub const DEFAULT_ACTION: &str = "menu";

/// Port of the network API when served next to the dashboard.
pub const API_PORT: u16 = 3000;

/// How long transient notifications stay on screen.
pub const NOTIFICATION_TTL_MS: u32 = 4_000;
