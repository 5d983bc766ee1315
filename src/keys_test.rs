use super::*;

#[test]
fn t_in_either_case_toggles_theme() {
    assert_eq!(Shortcut::from_key("t"), Some(Shortcut::ToggleTheme));
    assert_eq!(Shortcut::from_key("T"), Some(Shortcut::ToggleTheme));
}

#[test]
fn home_scrolls_to_top() {
    assert_eq!(Shortcut::from_key("Home"), Some(Shortcut::ScrollToTop));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["home", "End", "Escape", "tt", "", " "] {
        assert_eq!(Shortcut::from_key(key), None, "{key:?}");
    }
}
