use super::*;

fn is_aligned(ptr: *const ManagedString) -> bool {
    (ptr as usize).is_multiple_of(StringLayout::ALIGN)
}

#[test]
fn alignment_guarantee() {
    let image = StringImage::encode("Hello World").unwrap();
    assert!(is_aligned(image.as_ptr()));
}

#[test]
fn bytes_follow_layout() {
    let image = StringImage::from_units(&[0x41, 0x42, 0x43]).unwrap();
    let bytes = image.as_bytes();

    assert_eq!(bytes.len(), StringLayout::occupied_size(3));

    let len_at = StringLayout::LENGTH;
    let length = i32::from_ne_bytes(bytes[len_at..len_at + 4].try_into().unwrap());
    assert_eq!(length, 3);

    let units: Vec<u16> = bytes[StringLayout::FIRST_CHAR..]
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(units, [0x41, 0x42, 0x43]);
}

#[test]
fn type_tag_preserved() {
    let tag: kbridge_core::TypeTag = std::ptr::without_provenance(0x1000);
    let image = StringImage::with_type_tag(tag, &[1, 2]).unwrap();
    assert_eq!(image.view().type_tag(), tag);
}

#[test]
fn null_type_tag_by_default() {
    let image = StringImage::encode("x").unwrap();
    assert!(image.view().type_tag().is_null());
}

#[test]
fn empty_image() {
    let image = StringImage::from_units(&[]).unwrap();
    assert!(image.is_empty());
    assert_eq!(image.len(), 0);
    assert_eq!(image.occupied_size(), StringLayout::FIRST_CHAR);
    assert_eq!(image.view().length(), 0);
}

#[test]
fn encode_uses_utf16_units() {
    // U+1F600 needs a surrogate pair.
    let image = StringImage::encode("a\u{1F600}").unwrap();
    assert_eq!(image.len(), 3);
    assert_eq!(image.view().to_units(), [0x61, 0xD83D, 0xDE00]);
}

#[test]
fn clone_is_independent() {
    let mut image = StringImage::encode("abc").unwrap();
    let cloned = image.clone();

    image.view_mut().set_char(0, u16::from(b'z'));

    assert!(is_aligned(cloned.as_ptr()));
    assert_eq!(cloned.view().get_char(0), u16::from(b'a'));
    assert_eq!(image.view().get_char(0), u16::from(b'z'));
}

#[test]
fn too_long_message() {
    let err = ImageError::TooLong(MAX_LENGTH + 1);
    assert_eq!(
        err.to_string(),
        "string too long: 2147483648 code units (maximum 2147483647)"
    );
}

#[test]
fn as_bytes_spans_occupied_size() {
    for len in [0, 1, 2, 3, 7, 64] {
        let units = vec![0x2Au16; len];
        let image = StringImage::from_units(&units).unwrap();
        assert_eq!(image.as_bytes().len(), StringLayout::occupied_size(len));
    }
}
