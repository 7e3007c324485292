//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{layout_command, section_command, string_command};
use crate::commands::string::Edit;

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["kbridge"]);
    assert!(result.is_err());
}

#[test]
fn layout_params_defaults() {
    let m = layout_command()
        .try_get_matches_from(["layout"])
        .unwrap();
    let params = LayoutParams::from_matches(&m);

    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn layout_params_flags() {
    let m = layout_command()
        .try_get_matches_from(["layout", "--json", "--color", "never", "-vv"])
        .unwrap();
    let params = LayoutParams::from_matches(&m);

    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);
}

#[test]
fn section_requires_blob() {
    let result = section_command().try_get_matches_from(["section"]);
    assert!(result.is_err());
}

#[test]
fn section_params_extraction() {
    let m = section_command()
        .try_get_matches_from(["section", "pci.ids", "--head", "16"])
        .unwrap();
    let params = SectionParams::from_matches(&m);

    assert_eq!(params.blob_path, PathBuf::from("pci.ids"));
    assert_eq!(params.head, 16);
    assert!(!params.json);
}

#[test]
fn section_head_defaults_to_64() {
    let m = section_command()
        .try_get_matches_from(["section", "pci.ids"])
        .unwrap();
    assert_eq!(SectionParams::from_matches(&m).head, 64);
}

#[test]
fn string_params_keep_order() {
    let m = string_command()
        .try_get_matches_from([
            "string", "abc", "--set", "0=x", "--set", "-1=y", "--get", "-1", "--get", "2",
        ])
        .unwrap();
    let params = StringParams::from_matches(&m);

    assert_eq!(params.text, "abc");
    assert_eq!(
        params.edits,
        [
            Edit {
                index: 0,
                unit: 'x' as u16
            },
            Edit {
                index: -1,
                unit: 'y' as u16
            },
        ]
    );
    assert_eq!(params.reads, [-1, 2]);
}

#[test]
fn string_rejects_bad_edit() {
    let result = string_command().try_get_matches_from(["string", "abc", "--set", "x"]);
    assert!(result.is_err());
}

#[test]
fn color_always_colorizes() {
    let m = string_command()
        .try_get_matches_from(["string", "abc", "--color", "always"])
        .unwrap();
    let args: crate::commands::string::StringArgs = StringParams::from_matches(&m).into();
    assert!(args.color);
}
