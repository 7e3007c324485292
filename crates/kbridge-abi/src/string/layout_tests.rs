use super::*;

#[test]
fn header_follows_type_tag() {
    assert_eq!(StringLayout::TYPE_TAG, 0);
    assert_eq!(StringLayout::LENGTH, core::mem::size_of::<usize>());
    assert_eq!(StringLayout::FIRST_CHAR, core::mem::size_of::<usize>() + 4);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn offsets_on_64_bit() {
    let layout = StringLayout::native();
    assert_eq!(layout.type_tag_offset, 0x00);
    assert_eq!(layout.length_offset, 0x08);
    assert_eq!(layout.first_char_offset, 0x0C);
    assert_eq!(layout.unit_size, 2);
    assert_eq!(layout.align, 8);
}

#[test]
fn occupied_size_counts_units() {
    let header = StringLayout::FIRST_CHAR;
    assert_eq!(StringLayout::occupied_size(0), header);
    assert_eq!(StringLayout::occupied_size(1), header + 2);
    assert_eq!(StringLayout::occupied_size(11), header + 22);
}

#[test]
fn unit_offset_steps_by_code_unit() {
    assert_eq!(StringLayout::unit_offset(0), StringLayout::FIRST_CHAR);
    assert_eq!(StringLayout::unit_offset(5), StringLayout::FIRST_CHAR + 10);
}

#[test]
fn header_struct_fits_one_unit() {
    assert!(core::mem::size_of::<ManagedString>() >= StringLayout::occupied_size(1));
}
