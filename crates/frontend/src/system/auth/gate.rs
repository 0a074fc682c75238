//! Permission gate: decides whether a protected fragment renders.

use leptos::prelude::*;

use super::context::use_permissions;
use super::permissions::PermissionStore;
use crate::config::DEFAULT_ACTION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Deny,
}

impl GateDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// What a gated fragment requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateOptions {
    pub permission_key: Option<String>,
    pub action: String,
    /// Render only when access is missing (e.g. an upsell hint).
    pub show_if_no_permission: bool,
    /// Render optimistically while the session is still loading.
    pub show_while_loading: bool,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            permission_key: None,
            action: DEFAULT_ACTION.to_string(),
            show_if_no_permission: false,
            show_while_loading: false,
        }
    }
}

impl GateOptions {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            permission_key: Some(key.into()),
            action: action.into(),
            ..Self::default()
        }
    }
}

/// Evaluates a gate against a store snapshot. Pure and idempotent.
pub fn decide(store: &PermissionStore, options: &GateOptions) -> GateDecision {
    if store.is_loading {
        return if options.show_while_loading {
            GateDecision::Allow
        } else {
            GateDecision::Deny
        };
    }
    if !store.is_authenticated {
        return GateDecision::Deny;
    }
    let Some(key) = options.permission_key.as_deref() else {
        return GateDecision::Allow;
    };

    let access = store.has_permission(Some(key), &options.action);
    if access != options.show_if_no_permission {
        GateDecision::Allow
    } else {
        GateDecision::Deny
    }
}

/// Reactive check for imperative call sites (disabling buttons and the like).
pub fn use_can(key: impl Into<String>, action: impl Into<String>) -> Signal<bool> {
    let store = use_permissions();
    let key = key.into();
    let action = action.into();
    Signal::derive(move || store.with(|s| s.has_permission(Some(&key), &action)))
}

/// Renders `children` when the gate allows, `fallback` otherwise.
#[component]
pub fn PermissionGuard(
    #[prop(optional, into)] permission_key: Option<String>,
    #[prop(optional, into)] action: Option<String>,
    #[prop(optional)] show_if_no_permission: bool,
    #[prop(optional)] show_while_loading: bool,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_permissions();
    let options = GateOptions {
        permission_key,
        action: action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
        show_if_no_permission,
        show_while_loading,
    };

    let allowed = move || store.with(|s| decide(s, &options).is_allowed());

    view! {
        <Show when=allowed fallback=fallback>
            {children()}
        </Show>
    }
}
