use std::path::{Path, PathBuf};

use terafont::convert;
use terafont::layout::{KeyLayout, KeyState};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/layouts")
        .join(name)
}

fn load_layout() -> KeyLayout {
    KeyLayout::from_file(fixture_path("terafont_keyboard.json")).expect("error reading layout")
}

#[test]
fn load_terafont_layout() {
    let layout = load_layout();

    assert_eq!(layout.lookup("a", KeyState::Caps), Some("A"));
    assert_eq!(layout.lookup("=", KeyState::Shift), Some("+"));
    // Null and absent entries both fall back to default key behavior.
    assert_eq!(layout.lookup(";", KeyState::Caps), None);
    assert_eq!(layout.lookup("Enter", KeyState::Normal), None);
}

#[test]
fn type_through_layout_and_convert() {
    let layout = load_layout();

    // Caps Lock on: "a s" types the Terafont consonants for બ and ક.
    let state = KeyState::new(true, false);
    let typed: String = ["a", "s"]
        .iter()
        .map(|&key| layout.lookup(key, state).unwrap_or(key))
        .collect();

    assert_eq!(typed, "AS");
    assert_eq!(convert(&typed), "બક");
}
