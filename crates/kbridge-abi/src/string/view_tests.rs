use super::*;

fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

#[test]
fn get_char_in_range() {
    let image = StringImage::encode("Hello World").unwrap();
    let text = image.view();

    assert_eq!(get_char(text, 0), u16::from(b'H'));
    assert_eq!(get_char(text, 6), u16::from(b'W'));
    assert_eq!(get_char(text, 10), u16::from(b'd'));
}

#[test]
fn get_char_reads_stored_unit() {
    let image = StringImage::encode("Hello World").unwrap();
    let bytes = image.as_bytes();

    for i in 0..image.len() {
        let at = StringLayout::unit_offset(i);
        let stored = u16::from_ne_bytes([bytes[at], bytes[at + 1]]);
        assert_eq!(image.view().get_char(i as i32), stored);
    }
}

#[test]
fn get_char_out_of_range_is_null() {
    let image = StringImage::encode("Hello").unwrap();
    let text = image.view();

    assert_eq!(get_char(text, -1), NULL_CHAR);
    assert_eq!(get_char(text, text.length()), 0);
    assert_eq!(get_char(text, i32::MIN), 0);
    assert_eq!(get_char(text, i32::MAX), 0);
}

#[test]
fn get_char_on_empty_string() {
    let image = StringImage::from_units(&[]).unwrap();
    assert_eq!(image.view().get_char(0), 0);
    assert_eq!(image.view().get_char(-1), 0);
}

#[test]
fn set_char_round_trip() {
    let mut image = StringImage::encode("abcdef").unwrap();
    let mut text = image.view_mut();

    set_char(&mut text, 2, 0x263A);
    assert_eq!(text.get_char(2), 0x263A);
    assert_eq!(text.length(), 6);
}

#[test]
fn set_char_out_of_range_is_noop() {
    let mut image = StringImage::encode("Hello").unwrap();
    let before = image.as_bytes().to_vec();

    let mut text = image.view_mut();
    text.set_char(-1, u16::from(b'X'));
    text.set_char(5, u16::from(b'X'));
    text.set_char(i32::MAX, u16::from(b'X'));

    assert_eq!(image.as_bytes(), &before[..]);
}

#[test]
fn set_char_keeps_length() {
    let mut image = StringImage::encode("0123456789").unwrap();
    let mut text = image.view_mut();

    for i in -3..13 {
        text.set_char(i, 0xFFFF);
    }

    assert_eq!(text.length(), 10);
    assert_eq!(image.view().to_units(), vec![0xFFFF; 10]);
}

#[test]
fn hello_earth() {
    let mut image = StringImage::encode("Hello World     ").unwrap();
    assert_eq!(image.len(), 16);

    let mut text = image.view_mut();
    for (i, unit) in "Earth".encode_utf16().enumerate() {
        text.set_char(6 + i as i32, unit);
    }

    assert_eq!(image.view().to_units(), units("Hello Earth     "));
}

#[test]
fn units_iterator() {
    let image = StringImage::encode("abc").unwrap();
    let mut iter = image.view().units();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(u16::from(b'a')));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), units("bc"));
}

#[test]
fn negative_length_reads_as_empty() {
    let mut image = StringImage::encode("abc").unwrap();
    let ptr = image.as_mut_ptr();
    // SAFETY: writes the header of an image this test owns.
    unsafe { std::ptr::addr_of_mut!((*ptr).length).write(-4) };

    let text = image.view();
    assert_eq!(text.len(), 0);
    assert!(text.is_empty());
    assert_eq!(text.get_char(0), 0);
    assert_eq!(text.units().count(), 0);
}

#[test]
fn from_raw_null() {
    // SAFETY: null is always accepted.
    let text = unsafe { StringRef::from_raw(std::ptr::null()) };
    assert!(text.is_none());
    let text = unsafe { StringMut::from_raw(std::ptr::null_mut()) };
    assert!(text.is_none());
}
