//! Route guards: page-level gating with redirect-to-login.
//!
//! Every guard variant follows one policy. Without a session the visitor
//! is sent to the login page, carrying the requested path along. With a
//! session but without the permission, an inline fallback is rendered and,
//! if enabled, a notification fires once per guarded page instance.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use super::context::use_permissions;
use super::gate::{decide, GateDecision, GateOptions};
use super::permissions::PermissionStore;
use crate::config::{DEFAULT_ACTION, HOME_PATH, LOGIN_PATH, REDIRECT_PARAM};
use crate::shared::notifications::use_notifications;
use crate::system::pages::access_denied::AccessDenied;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    Loading,
    Forbidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Fallback(FallbackReason),
    RedirectToLogin,
}

/// Gate decision extended with the unauthenticated redirect.
pub fn route_decision(store: &PermissionStore, options: &GateOptions) -> RouteDecision {
    if store.is_loading {
        return match decide(store, options) {
            GateDecision::Allow => RouteDecision::Render,
            GateDecision::Deny => RouteDecision::Fallback(FallbackReason::Loading),
        };
    }
    if !store.is_authenticated {
        return RouteDecision::RedirectToLogin;
    }
    match decide(store, options) {
        GateDecision::Allow => RouteDecision::Render,
        GateDecision::Deny => RouteDecision::Fallback(FallbackReason::Forbidden),
    }
}

/// Tracks whether the access-denied notification already fired for one
/// guarded page instance.
#[derive(Debug, Default)]
pub struct DenyNotice {
    shown: bool,
}

impl DenyNotice {
    /// True exactly once: on the first forbidden decision observed.
    pub fn observe(&mut self, decision: RouteDecision) -> bool {
        if decision == RouteDecision::Fallback(FallbackReason::Forbidden) && !self.shown {
            self.shown = true;
            return true;
        }
        false
    }
}

/// Path plus query of the current location, as it should survive login.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

/// Login URL that brings the visitor back to `requested` afterwards.
pub fn login_redirect_path(requested: &str) -> String {
    if requested.is_empty() || requested == HOME_PATH || requested.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_string();
    }
    format!(
        "{}?{}={}",
        LOGIN_PATH,
        REDIRECT_PARAM,
        urlencoding::encode(requested)
    )
}

/// Where to go after login. Only same-origin absolute paths are honoured.
pub fn post_login_target(redirect: Option<&str>) -> String {
    let Some(raw) = redirect else {
        return HOME_PATH.to_string();
    };
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_default();
    let safe = decoded.starts_with('/')
        && !decoded.starts_with("//")
        && !decoded.contains('\\')
        && !decoded.starts_with(LOGIN_PATH);
    if safe {
        decoded
    } else {
        HOME_PATH.to_string()
    }
}

/// Guards a page. See the module docs for the policy.
#[component]
pub fn ProtectedRoute(
    #[prop(optional, into)] permission_key: Option<String>,
    #[prop(optional, into)] action: Option<String>,
    #[prop(optional)] show_while_loading: bool,
    #[prop(default = true)] notify: bool,
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_permissions();
    let navigate = use_navigate();
    let location = use_location();
    let notifications = use_notifications();

    let options = GateOptions {
        permission_key,
        show_while_loading,
        action: action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
        ..GateOptions::default()
    };
    let decision = Memo::new(move |_| store.with(|s| route_decision(s, &options)));

    let notice = StoredValue::new(DenyNotice::default());

    Effect::new(move |_| {
        let current = decision.get();
        match current {
            RouteDecision::RedirectToLogin => {
                let requested = requested_path(
                    &location.pathname.get_untracked(),
                    &location.search.get_untracked(),
                );
                let target = login_redirect_path(&requested);
                log::info!("unauthenticated access to {}, redirecting", requested);
                navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            RouteDecision::Fallback(FallbackReason::Forbidden) => {
                let first = notice.try_update_value(|n| n.observe(current)).unwrap_or(false);
                if first {
                    log::debug!("access denied to {}", location.pathname.get_untracked());
                    if notify {
                        notifications.error("You do not have permission to view this page.");
                    }
                }
            }
            _ => {}
        }
    });

    move || match decision.get() {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Fallback(FallbackReason::Loading) => view! {
            <div class="page-loading"><Spinner /></div>
        }
        .into_any(),
        RouteDecision::Fallback(FallbackReason::Forbidden) => match fallback.clone() {
            Some(fallback) => fallback.run(),
            None => view! { <AccessDenied /> }.into_any(),
        },
        RouteDecision::RedirectToLogin => ().into_any(),
    }
}

/// Wraps a page in a [`ProtectedRoute`] with notifications on.
pub fn with_permission<F, V>(
    page: F,
    permission_key: impl Into<String>,
    action: impl Into<String>,
) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let permission_key = permission_key.into();
    let action = action.into();
    move || {
        let page = page.clone();
        view! {
            <ProtectedRoute permission_key=permission_key.clone() action=action.clone()>
                {page()}
            </ProtectedRoute>
        }
        .into_any()
    }
}
