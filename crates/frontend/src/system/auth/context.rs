use contracts::system::auth::{PermissionRecord, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::permissions::PermissionStore;
use super::session::{SessionEpoch, SessionTicket};
use super::{api, storage};
use crate::shared::error::ApiError;

/// A session as the API resolved it.
pub struct ResolvedSession {
    pub user: UserInfo,
    pub permissions: Vec<PermissionRecord>,
}

/// Session-scoped auth state, provided once by [`AuthProvider`].
///
/// The permission store has a single writer (the session routines in this
/// module) and any number of readers.
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<PermissionStore>,
    user: RwSignal<Option<UserInfo>>,
    epoch: StoredValue<SessionEpoch>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            store: RwSignal::new(PermissionStore::loading()),
            user: RwSignal::new(None),
            epoch: StoredValue::new(SessionEpoch::default()),
        }
    }

    pub fn permissions(&self) -> ReadSignal<PermissionStore> {
        self.store.read_only()
    }

    pub fn user(&self) -> ReadSignal<Option<UserInfo>> {
        self.user.read_only()
    }

    fn begin(&self) -> Option<SessionTicket> {
        self.epoch.try_update_value(|epoch| epoch.begin())
    }

    fn is_current(&self, ticket: SessionTicket) -> bool {
        self.epoch
            .try_with_value(|epoch| epoch.is_current(ticket))
            .unwrap_or(false)
    }

    /// Writes the outcome of a session fetch into the store, if `ticket`
    /// is still current. Storage is left alone.
    fn settle(&self, ticket: SessionTicket, outcome: Result<ResolvedSession, ApiError>) -> Settled {
        if !self.is_current(ticket) {
            log::debug!("discarding stale session result");
            return Settled::Stale;
        }

        let settled = match &outcome {
            Ok(session) => {
                log::info!(
                    "session resolved for {} with {} permission keys",
                    session.user.email,
                    session.permissions.len()
                );
                Settled::Resolved
            }
            Err(e) => {
                log::warn!("session failed to resolve: {}", e);
                Settled::Failed
            }
        };
        let (store, user) = settled_state(outcome);
        self.store.try_set(store);
        self.user.try_set(user);
        settled
    }

    /// Like [`Self::settle`], and drops the stored tokens on failure.
    fn apply(&self, ticket: SessionTicket, outcome: Result<ResolvedSession, ApiError>) -> Settled {
        let settled = self.settle(ticket, outcome);
        if settled == Settled::Failed {
            storage::clear_tokens();
        }
        settled
    }

    /// Supersedes anything in flight and drops to signed out.
    fn reset(&self) {
        self.epoch.try_update_value(|epoch| epoch.invalidate());
        self.store.set(PermissionStore::signed_out());
        self.user.set(None);
    }

    fn sign_out(&self) {
        self.reset();
        storage::clear_tokens();
    }
}

/// How a finished session fetch was taken in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Settled {
    Stale,
    Resolved,
    Failed,
}

/// Store and user a finished session fetch settles to. Failures end
/// signed out, never loading.
fn settled_state(outcome: Result<ResolvedSession, ApiError>) -> (PermissionStore, Option<UserInfo>) {
    match outcome {
        Ok(session) => (PermissionStore::resolved(session.permissions), Some(session.user)),
        Err(_) => (PermissionStore::failed(), None),
    }
}

async fn load_session(ctx: AuthContext) {
    let Some(ticket) = ctx.begin() else {
        return;
    };

    let Some(access_token) = storage::get_access_token() else {
        log::debug!("no stored token, starting signed out");
        if ctx.is_current(ticket) {
            ctx.store.try_set(PermissionStore::signed_out());
        }
        return;
    };

    let outcome = api::get_session(&access_token)
        .await
        .map(|session| ResolvedSession {
            user: session.user,
            permissions: session.permissions.into_records(),
        });
    ctx.apply(ticket, outcome);
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new();

    // Restore the session from localStorage once, on mount.
    spawn_local(load_session(ctx));

    on_cleanup(move || {
        ctx.epoch.try_update_value(|epoch| epoch.dispose());
    });

    provide_context(ctx);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// Hook to read the permission store
pub fn use_permissions() -> ReadSignal<PermissionStore> {
    use_auth().permissions()
}

/// Perform login and resolve the session from the response
pub async fn do_login(ctx: AuthContext, email: String, password: String) -> Result<(), ApiError> {
    let Some(ticket) = ctx.begin() else {
        return Ok(());
    };

    // The login ticket supersedes any load in flight, so a failure must
    // settle the store itself.
    let response = match api::login(email, password).await {
        Ok(response) => response,
        Err(e) => {
            ctx.apply(ticket, Err(e.clone()));
            return Err(e);
        }
    };

    if !ctx.is_current(ticket) {
        log::debug!("login superseded, dropping its tokens");
        return Ok(());
    }
    storage::save_tokens(&response.access_token, response.refresh_token.as_deref());

    ctx.apply(
        ticket,
        Ok(ResolvedSession {
            user: response.user,
            permissions: response.permissions.into_records(),
        }),
    );
    Ok(())
}

/// Perform logout. Local state is cleared immediately; the server-side
/// revocation is best effort.
pub async fn do_logout(ctx: AuthContext) {
    let access_token = storage::get_access_token();
    let refresh_token = storage::get_refresh_token();
    ctx.sign_out();

    if let Some(access_token) = access_token {
        if let Err(e) = api::logout(&access_token, refresh_token).await {
            log::debug!("logout revocation failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::PermissionRecord;

    fn session() -> ResolvedSession {
        ResolvedSession {
            user: UserInfo {
                id: "u-1".to_string(),
                name: None,
                email: "ops@example.com".to_string(),
            },
            permissions: vec![PermissionRecord::new("all-offers", ["list"])],
        }
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[test]
    fn test_failed_fetch_settles_signed_out() {
        Owner::new().with(|| {
            let ctx = AuthContext::new();
            let load = ctx.begin().unwrap();

            assert_eq!(ctx.settle(load, Err(network_error())), Settled::Failed);
            let store = ctx.permissions().get_untracked();
            assert!(!store.is_loading);
            assert!(!store.is_authenticated);
            assert_eq!(ctx.user().get_untracked(), None);
        });
    }

    #[test]
    fn test_failed_login_during_load_is_not_stuck_loading() {
        Owner::new().with(|| {
            let ctx = AuthContext::new();
            let load = ctx.begin().unwrap();
            let login = ctx.begin().unwrap();

            assert_eq!(ctx.settle(login, Err(ApiError::Unauthorized)), Settled::Failed);
            assert_eq!(ctx.settle(load, Ok(session())), Settled::Stale);

            let store = ctx.permissions().get_untracked();
            assert!(!store.is_loading);
            assert!(!store.is_authenticated);
        });
    }

    #[test]
    fn test_stale_result_changes_nothing() {
        Owner::new().with(|| {
            let ctx = AuthContext::new();
            let load = ctx.begin().unwrap();
            let _newer = ctx.begin().unwrap();

            assert_eq!(ctx.settle(load, Ok(session())), Settled::Stale);
            assert_eq!(ctx.permissions().get_untracked(), PermissionStore::loading());
            assert_eq!(ctx.user().get_untracked(), None);
        });
    }

    #[test]
    fn test_logout_during_load_stays_signed_out() {
        Owner::new().with(|| {
            let ctx = AuthContext::new();
            let load = ctx.begin().unwrap();
            ctx.reset();

            assert_eq!(ctx.settle(load, Ok(session())), Settled::Stale);
            assert_eq!(ctx.permissions().get_untracked(), PermissionStore::signed_out());
            assert_eq!(ctx.user().get_untracked(), None);
        });
    }

    #[test]
    fn test_resolved_session_grants() {
        Owner::new().with(|| {
            let ctx = AuthContext::new();
            let load = ctx.begin().unwrap();

            assert_eq!(ctx.settle(load, Ok(session())), Settled::Resolved);
            let store = ctx.permissions().get_untracked();
            assert!(store.is_authenticated);
            assert!(store.has_permission(Some("all-offers"), "list"));
            assert!(!store.has_permission(Some("all-offers"), "add"));
            assert_eq!(
                ctx.user().get_untracked().map(|u| u.email),
                Some("ops@example.com".to_string())
            );
        });
    }
}
