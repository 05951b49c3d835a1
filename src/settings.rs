//! Game settings and preferences
//!
//! Persisted in LocalStorage, separate from any simulation state.

use serde::{Deserialize, Serialize};

use crate::sim::Action;

/// Key names bound to each action
///
/// Names are compared lowercase, so `"D"` and `"d"` both move right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
    pub jump: String,
    pub grapple: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: "a".to_string(),
            move_right: "d".to_string(),
            jump: "w".to_string(),
            grapple: "e".to_string(),
        }
    }
}

impl KeyBindings {
    /// Normalize a raw key name for lookup
    pub fn normalize(key: &str) -> String {
        key.to_lowercase()
    }

    /// Action bound to a raw key name, if any
    pub fn action_for(&self, key: &str) -> Option<Action> {
        let key = Self::normalize(key);
        [
            (&self.move_left, Action::MoveLeft),
            (&self.move_right, Action::MoveRight),
            (&self.jump, Action::Jump),
            (&self.grapple, Action::Grapple),
        ]
        .into_iter()
        .find(|(bound, _)| Self::normalize(bound.as_str()) == key)
        .map(|(_, action)| action)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: KeyBindings,

    // === Visual Effects ===
    /// Glow around the player body
    pub player_glow: bool,
    /// Draw the grapple line dashed instead of solid
    pub dashed_grapple_line: bool,

    // === HUD ===
    /// Show heat and speed readouts
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            player_glow: true,
            dashed_grapple_line: true,
            show_hud: true,
        }
    }
}

impl Settings {
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "skyhook_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Settings from a stored blob, or `None` if nothing usable was stored
    pub fn from_stored(stored: Option<&str>) -> Option<Self> {
        match Self::from_json(stored?) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Discarding unreadable settings: {}", e);
                None
            }
        }
    }

    /// Load settings from LocalStorage, writing the defaults back when
    /// nothing usable is stored yet
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        if let Some(settings) = Self::from_stored(stored.as_deref()) {
            log::info!("Loaded settings from LocalStorage");
            return settings;
        }

        log::info!("Using default settings");
        let settings = Self::default();
        settings.save();
        settings
    }

    /// Save settings to LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            return;
        };

        match self.to_json() {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {:?}", e),
            },
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}
