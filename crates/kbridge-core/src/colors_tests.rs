use super::Colors;

#[test]
fn off_paints_plain_text() {
    assert_eq!(Colors::OFF.paint(Colors::OFF.name, "length"), "length");
    assert!(!Colors::OFF.is_enabled());
}

#[test]
fn on_wraps_with_reset() {
    let c = Colors::ON;
    assert_eq!(c.paint(c.value, 42), "\x1b[32m42\x1b[0m");
    assert!(c.is_enabled());
}

#[test]
fn new_follows_flag() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert!(!Colors::default().is_enabled());
}
