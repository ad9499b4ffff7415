use super::*;

#[test]
fn full_text_visible_before_start() {
    let effect = TypingEffect::new("Ada");
    assert_eq!(effect.visible(), "Ada");
    assert!(!effect.is_done());
}

#[test]
fn start_clears_then_ticks_reveal_one_char_each() {
    let mut effect = TypingEffect::new("Ada");
    assert!(effect.start());
    assert_eq!(effect.visible(), "");
    assert!(effect.tick());
    assert_eq!(effect.visible(), "A");
    assert!(effect.tick());
    assert_eq!(effect.visible(), "Ad");
    assert!(!effect.tick());
    assert_eq!(effect.visible(), "Ada");
    assert!(effect.is_done());
}

#[test]
fn ticks_after_completion_are_noops() {
    let mut effect = TypingEffect::new("Hi");
    effect.start();
    while effect.tick() {}
    assert!(!effect.tick());
    assert_eq!(effect.visible(), "Hi");
}

#[test]
fn start_is_one_shot() {
    let mut effect = TypingEffect::new("Hi");
    assert!(effect.start());
    effect.tick();
    assert!(!effect.start());
    assert_eq!(effect.visible(), "H");
}

#[test]
fn tick_before_start_does_nothing() {
    let mut effect = TypingEffect::new("Hi");
    assert!(!effect.tick());
    assert_eq!(effect.visible(), "Hi");
}

#[test]
fn empty_text_never_starts() {
    let mut effect = TypingEffect::new("");
    assert!(!effect.start());
}

#[test]
fn multibyte_characters_reveal_whole() {
    let mut effect = TypingEffect::new("Zoë");
    effect.start();
    effect.tick();
    effect.tick();
    effect.tick();
    assert_eq!(effect.visible(), "Zoë");
    assert!(effect.is_done());
}
