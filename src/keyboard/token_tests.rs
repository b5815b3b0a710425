use super::event::KeyEvent;
use super::token::*;

#[test]
fn resolve_browser_names() {
    assert_eq!(resolve_key_name("Escape"), "esc");
    assert_eq!(resolve_key_name(" "), "space");
    assert_eq!(resolve_key_name("ArrowUp"), "up");
    assert_eq!(resolve_key_name("PageDown"), "pagedown");
    assert_eq!(resolve_key_name("Control"), "ctrl");
    assert_eq!(resolve_key_name("Meta"), "meta");
    assert_eq!(resolve_key_name("OS"), "meta");
}

#[test]
fn resolve_passes_through_lowercased() {
    assert_eq!(resolve_key_name("A"), "a");
    assert_eq!(resolve_key_name("F5"), "f5");
    assert_eq!(resolve_key_name("SomethingOdd"), "somethingodd");
}

#[test]
fn known_keys() {
    assert!(is_known_key("a"));
    assert!(is_known_key("/"));
    assert!(is_known_key("esc"));
    assert!(is_known_key("space"));
    assert!(is_known_key("f1"));
    assert!(is_known_key("f24"));
    assert!(!is_known_key("f25"));
    assert!(!is_known_key("f0"));
    assert!(!is_known_key("bogus"));
    assert!(!is_known_key(""));
}

#[test]
fn tokenize_plain_character_uppercases() {
    assert_eq!(tokenize(&KeyEvent::plain("a")).as_str(), "A");
}

#[test]
fn tokenize_modifier_combo_in_fixed_order() {
    let event = KeyEvent::plain("a").with_shift().with_ctrl();
    assert_eq!(tokenize(&event).as_str(), "ctrl+shift+A");
}

#[test]
fn tokenize_all_four_modifiers() {
    let event = KeyEvent::plain("k")
        .with_ctrl()
        .with_alt()
        .with_shift()
        .with_meta();
    assert_eq!(tokenize(&event).as_str(), "ctrl+alt+shift+meta+K");
}

#[test]
fn tokenize_named_key_stays_lowercase() {
    let event = KeyEvent::plain("Escape").with_ctrl();
    assert_eq!(tokenize(&event).as_str(), "ctrl+esc");
}

#[test]
fn tokenize_modifier_press_is_not_doubled() {
    let event = KeyEvent::plain("Control").with_ctrl();
    assert_eq!(tokenize(&event).as_str(), "ctrl");

    let event = KeyEvent::plain("Shift").with_ctrl().with_shift();
    assert_eq!(tokenize(&event).as_str(), "ctrl+shift");
}

#[test]
fn lone_modifier_detection() {
    assert!(KeyToken::from("ctrl").is_lone_modifier());
    assert!(KeyToken::from("meta").is_lone_modifier());
    assert!(!KeyToken::from("ctrl+A").is_lone_modifier());
    assert!(!KeyToken::from("A").is_lone_modifier());
}

#[test]
fn display_form_is_cosmetic_only() {
    let token = KeyToken::from("ctrl+alt+meta+K");
    assert_eq!(
        display_form(&token, Platform::MacOS),
        "ctrl+option+command+K"
    );
    assert_eq!(display_form(&token, Platform::Linux), "ctrl+alt+meta+K");
    assert_eq!(display_form(&token, Platform::Windows), "ctrl+alt+meta+K");
}
