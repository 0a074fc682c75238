use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "dashboard_access_token";
const REFRESH_TOKEN_KEY: &str = "dashboard_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the tokens of a fresh login. A missing refresh token clears
/// any stale one.
pub fn save_tokens(access_token: &str, refresh_token: Option<&str>) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
    match refresh_token {
        Some(token) => {
            let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
        }
        None => {
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

/// Bearer token of the stored session, if any.
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
