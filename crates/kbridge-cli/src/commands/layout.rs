use std::fmt::Write as _;

use kbridge_abi::StringLayout;
use kbridge_core::{Colors, Int32, TypeTag};
use serde::Serialize;

use super::{CommandError, finish, to_json};

pub struct LayoutArgs {
    pub json: bool,
    pub color: bool,
}

/// Field offsets and sizes of a managed string on this target.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub type_tag_offset: usize,
    pub type_tag_size: usize,
    pub length_offset: usize,
    pub length_size: usize,
    pub first_char_offset: usize,
    pub unit_size: usize,
    pub align: usize,
}

impl LayoutReport {
    pub fn native() -> Self {
        let layout = StringLayout::native();
        Self {
            type_tag_offset: layout.type_tag_offset,
            type_tag_size: size_of::<TypeTag>(),
            length_offset: layout.length_offset,
            length_size: size_of::<Int32>(),
            first_char_offset: layout.first_char_offset,
            unit_size: layout.unit_size,
            align: layout.align,
        }
    }
}

pub fn run(args: LayoutArgs) {
    finish(output(&args));
}

pub fn output(args: &LayoutArgs) -> Result<String, CommandError> {
    let report = LayoutReport::native();
    if args.json {
        to_json(&report)
    } else {
        Ok(render(&report, Colors::new(args.color)))
    }
}

pub fn render(report: &LayoutReport, colors: Colors) -> String {
    let mut out = String::new();
    let name = |s: &str| colors.paint(colors.name, format!("{s:<11}"));
    let offset = |o: usize| colors.paint(colors.dim, format!("{o:#04x}"));

    writeln!(out, "{}", colors.paint(colors.dim, "[ManagedString]")).unwrap();
    writeln!(
        out,
        "{} {}  {}",
        name("type_tag"),
        offset(report.type_tag_offset),
        colors.paint(colors.value, report.type_tag_size)
    )
    .unwrap();
    writeln!(
        out,
        "{} {}  {}",
        name("length"),
        offset(report.length_offset),
        colors.paint(colors.value, report.length_size)
    )
    .unwrap();
    writeln!(
        out,
        "{} {}  {} per unit",
        name("first_char"),
        offset(report.first_char_offset),
        colors.paint(colors.value, report.unit_size)
    )
    .unwrap();
    writeln!(
        out,
        "{} {}",
        name("align"),
        colors.paint(colors.value, report.align)
    )
    .unwrap();
    writeln!(
        out,
        "{} {} + {} * length",
        name("occupied"),
        colors.paint(colors.value, report.first_char_offset),
        colors.paint(colors.value, report.unit_size)
    )
    .unwrap();
    out
}
