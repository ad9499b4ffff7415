use super::*;

fn open_menu() -> MenuState {
    let mut menu = MenuState::default();
    menu.toggle();
    menu
}

#[test]
fn default_menu_is_closed_with_no_mirrors_set() {
    let menu = MenuState::default();
    assert!(!menu.is_open());
    assert!(!menu.hamburger_active());
    assert!(!menu.nav_active());
    assert!(!menu.scroll_locked());
}

#[test]
fn opening_sets_both_classes_and_scroll_lock() {
    let menu = open_menu();
    assert!(menu.hamburger_active());
    assert!(menu.nav_active());
    assert!(menu.scroll_locked());
}

#[test]
fn closing_clears_all_three_mirrors() {
    let mut menu = open_menu();
    assert!(menu.close());
    assert!(!menu.hamburger_active());
    assert!(!menu.nav_active());
    assert!(!menu.scroll_locked());
}

#[test]
fn closing_closed_menu_is_noop() {
    let mut menu = MenuState::default();
    assert!(!menu.close());
    assert_eq!(menu, MenuState::default());
}

#[test]
fn toggle_twice_returns_to_closed() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(!menu.is_open());
}

#[test]
fn outside_click_closes_only_open_menu() {
    assert!(closes_on_click(open_menu(), false, false));
    assert!(!closes_on_click(open_menu(), true, false));
    assert!(!closes_on_click(open_menu(), false, true));
    assert!(!closes_on_click(MenuState::default(), false, false));
}

#[test]
fn resize_closes_above_breakpoint_only() {
    assert!(!closes_on_resize(open_menu(), 768.0));
    assert!(closes_on_resize(open_menu(), 769.0));
    assert!(!closes_on_resize(MenuState::default(), 1200.0));
}
