use kbridge_core::Colors;

use super::layout::{LayoutArgs, LayoutReport, output, render};

#[test]
#[cfg(target_pointer_width = "64")]
fn renders_native_layout() {
    let out = render(&LayoutReport::native(), Colors::OFF);
    insta::assert_snapshot!(out, @r"
    [ManagedString]
    type_tag    0x00  8
    length      0x08  4
    first_char  0x0c  2 per unit
    align       8
    occupied    12 + 2 * length
    ");
}

#[test]
fn first_char_follows_length_field() {
    let report = LayoutReport::native();
    assert_eq!(report.type_tag_offset, 0);
    assert_eq!(report.length_offset, report.type_tag_size);
    assert_eq!(
        report.first_char_offset,
        report.length_offset + report.length_size
    );
    assert_eq!(report.unit_size, 2);
}

#[test]
fn json_uses_field_names() {
    let value = serde_json::to_value(LayoutReport::native()).unwrap();
    assert_eq!(value["type_tag_offset"], 0);
    assert_eq!(value["length_size"], 4);
    assert_eq!(value["unit_size"], 2);
}

#[test]
fn colored_output_wraps_names() {
    let out = render(&LayoutReport::native(), Colors::ON);
    assert!(out.contains("\x1b[34mtype_tag   \x1b[0m"));
    assert!(out.ends_with("* length\n"));
}

#[test]
fn output_matches_render_and_json() {
    let text = output(&LayoutArgs {
        json: false,
        color: false,
    })
    .unwrap();
    assert_eq!(text, render(&LayoutReport::native(), Colors::OFF));

    let json = output(&LayoutArgs {
        json: true,
        color: false,
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["unit_size"], 2);
}
