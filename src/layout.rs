//! Keyboard layout configuration.
//!
//! A keyboard emulation layer turns physical key presses into Terafont
//! source characters through a JSON table keyed by modifier state, loaded
//! once at startup. Only that data model lives here; key-event handling
//! and text buffers belong to the caller. The layout file maps a physical
//! key identifier to up to four outputs:
//!
//! ```json
//! { "a": { "normal": "f", "shift": null, "caps": "A", "caps_shift": null } }
//! ```
//!
//! An absent key or a `null` entry means the key keeps its default,
//! unmodified behavior in that state.

use std::fs;
use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::LayoutError;

/// Modifier state selecting one of a key's four possible outputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyState {
    Normal,
    Shift,
    Caps,
    CapsShift,
}

impl KeyState {
    /// Derive the modifier state from the Caps Lock and Shift flags.
    pub fn new(caps_lock: bool, shift: bool) -> Self {
        match (caps_lock, shift) {
            (true, true) => KeyState::CapsShift,
            (true, false) => KeyState::Caps,
            (false, true) => KeyState::Shift,
            (false, false) => KeyState::Normal,
        }
    }
}

/// The four possible outputs of a single physical key.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyOutputs {
    #[serde(default)]
    normal: Option<String>,
    #[serde(default)]
    shift: Option<String>,
    #[serde(default)]
    caps: Option<String>,
    #[serde(default)]
    caps_shift: Option<String>,
}

impl KeyOutputs {
    fn get(&self, state: KeyState) -> Option<&str> {
        let output = match state {
            KeyState::Normal => &self.normal,
            KeyState::Shift => &self.shift,
            KeyState::Caps => &self.caps,
            KeyState::CapsShift => &self.caps_shift,
        };
        output.as_deref()
    }
}

/// A keyboard layout mapping physical keys to Terafont source characters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct KeyLayout {
    keys: FxHashMap<String, KeyOutputs>,
}

impl KeyLayout {
    /// Parse a layout from its JSON representation.
    pub fn from_json(json: &str) -> Result<KeyLayout, LayoutError> {
        let layout: KeyLayout = serde_json::from_str(json)?;
        debug!("keyboard layout loaded: {} keys", layout.keys.len());
        Ok(layout)
    }

    /// Read and parse a layout file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<KeyLayout, LayoutError> {
        let json = fs::read_to_string(path)?;
        KeyLayout::from_json(&json)
    }

    /// The output for `key` in `state`.
    ///
    /// `None` means the key keeps its default behavior: either the key is
    /// not in the layout at all, or its entry for this state is `null`.
    pub fn lookup(&self, key: &str, state: KeyState) -> Option<&str> {
        self.keys.get(key).and_then(|outputs| outputs.get(state))
    }
}
