use super::*;

#[test]
fn empty_slot_has_no_notification() {
    assert!(NotificationSlot::default().current().is_none());
}

#[test]
fn show_sets_message_kind_and_fresh_id() {
    let mut slot = NotificationSlot::default();
    let id = slot.show("Saved", NotificationKind::Success);
    let current = slot.current().cloned();
    assert_eq!(
        current,
        Some(Notification { id, message: "Saved".to_owned(), kind: NotificationKind::Success, leaving: false })
    );
}

#[test]
fn second_notification_evicts_first() {
    let mut slot = NotificationSlot::default();
    let first = slot.show("one", NotificationKind::Success);
    let second = slot.show("two", NotificationKind::Error);
    assert_ne!(first, second);
    let current = slot.current().map(|n| (n.id, n.message.clone()));
    assert_eq!(current, Some((second, "two".to_owned())));
}

#[test]
fn stale_timers_do_not_touch_replacement() {
    let mut slot = NotificationSlot::default();
    let first = slot.show("one", NotificationKind::Success);
    let second = slot.show("two", NotificationKind::Success);
    assert!(!slot.begin_dismiss(first));
    assert!(!slot.remove(first));
    assert_eq!(slot.current().map(|n| n.id), Some(second));
    assert!(!slot.current().is_some_and(|n| n.leaving));
}

#[test]
fn dismiss_fades_then_removes() {
    let mut slot = NotificationSlot::default();
    let id = slot.show("bye", NotificationKind::Success);
    assert!(slot.begin_dismiss(id));
    assert!(slot.current().is_some_and(|n| n.leaving));
    assert!(!slot.begin_dismiss(id));
    assert!(slot.remove(id));
    assert!(slot.current().is_none());
}

#[test]
fn close_removes_immediately() {
    let mut slot = NotificationSlot::default();
    let id = slot.show("bye", NotificationKind::Error);
    assert!(slot.remove(id));
    assert!(!slot.remove(id));
}

#[test]
fn kind_presentation() {
    assert_eq!(NotificationKind::Success.css_class(), "success");
    assert_eq!(NotificationKind::Error.css_class(), "error");
    assert_eq!(NotificationKind::Success.icon(), "fas fa-check-circle");
    assert_eq!(NotificationKind::Error.icon(), "fas fa-exclamation-circle");
}
