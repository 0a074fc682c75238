//! Layout settings: sidebar visibility and density.
//!
//! Persisted in localStorage as JSON so the layout survives reloads.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

const SETTINGS_STORAGE_KEY: &str = "dashboard-layout";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub sidebar_open: bool,
    /// Icons only, no labels.
    pub sidebar_collapsed: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            sidebar_collapsed: false,
        }
    }
}

impl LayoutSettings {
    /// Decodes stored settings. Missing or corrupt data yields defaults.
    pub fn decode(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn load_settings() -> LayoutSettings {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten());
    LayoutSettings::decode(raw.as_deref())
}

fn save_settings(settings: LayoutSettings) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_STORAGE_KEY, &settings.encode());
    }
}

#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<LayoutSettings>,
}

impl SettingsContext {
    fn update(&self, f: impl FnOnce(&mut LayoutSettings)) {
        self.settings.update(f);
        save_settings(self.settings.get_untracked());
    }

    pub fn toggle_sidebar(&self) {
        self.update(|s| s.sidebar_open = !s.sidebar_open);
    }

    pub fn toggle_collapsed(&self) {
        self.update(|s| s.sidebar_collapsed = !s.sidebar_collapsed);
    }
}

/// Provides layout settings to children components.
#[component]
pub fn SettingsProvider(children: Children) -> impl IntoView {
    let settings = RwSignal::new(load_settings());
    provide_context(SettingsContext { settings });

    children()
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
        .expect("SettingsContext not found. Wrap your app with SettingsProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_missing() {
        assert_eq!(LayoutSettings::decode(None), LayoutSettings::default());
    }

    #[test]
    fn test_decode_corrupt() {
        assert_eq!(LayoutSettings::decode(Some("{not json")), LayoutSettings::default());
    }

    #[test]
    fn test_decode_partial() {
        let settings = LayoutSettings::decode(Some(r#"{"sidebar_collapsed": true}"#));
        assert!(settings.sidebar_open);
        assert!(settings.sidebar_collapsed);
    }

    #[test]
    fn test_encode_decode() {
        let settings = LayoutSettings {
            sidebar_open: false,
            sidebar_collapsed: true,
        };
        assert_eq!(LayoutSettings::decode(Some(&settings.encode())), settings);
    }
}
