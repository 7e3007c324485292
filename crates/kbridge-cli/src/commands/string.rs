use std::fmt::Write as _;

use kbridge_abi::StringImage;
use kbridge_core::{Char, Colors, Int32};
use serde::Serialize;

use super::{CommandError, finish, to_json};

const ROW: usize = 8;

/// One `--set INDEX=UNIT` write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub index: Int32,
    pub unit: Char,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("expected INDEX=UNIT, got `{0}`")]
    MissingSeparator(String),
    #[error("invalid index `{0}`")]
    InvalidIndex(String),
    #[error("invalid code unit `{0}`: expected one BMP character or U+XXXX")]
    InvalidUnit(String),
}

/// Parse `INDEX=UNIT`, where UNIT is a single BMP character or `U+XXXX`.
pub fn parse_edit(s: &str) -> Result<Edit, EditError> {
    let (index, unit) = s
        .split_once('=')
        .ok_or_else(|| EditError::MissingSeparator(s.to_string()))?;
    let index = index
        .trim()
        .parse::<Int32>()
        .map_err(|_| EditError::InvalidIndex(index.to_string()))?;
    let unit = parse_unit(unit).ok_or_else(|| EditError::InvalidUnit(unit.to_string()))?;
    Ok(Edit { index, unit })
}

fn parse_unit(s: &str) -> Option<Char> {
    if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+"))
        && !hex.is_empty()
    {
        return Char::from_str_radix(hex, 16).ok();
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let mut buf = [0; 2];
    match c.encode_utf16(&mut buf) {
        [unit] => Some(*unit),
        _ => None,
    }
}

pub struct StringArgs {
    pub text: String,
    pub edits: Vec<Edit>,
    pub reads: Vec<Int32>,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct WriteReport {
    pub index: Int32,
    pub unit: Char,
    pub applied: bool,
}

#[derive(Debug, Serialize)]
pub struct ReadReport {
    pub index: Int32,
    pub unit: Char,
}

/// State of a string after its writes, plus the reads taken afterwards.
#[derive(Debug, Serialize)]
pub struct StringReport {
    pub length: Int32,
    pub occupied: usize,
    pub units: Vec<Char>,
    pub writes: Vec<WriteReport>,
    pub reads: Vec<ReadReport>,
}

pub fn run(args: StringArgs) {
    finish(output(&args));
}

pub fn output(args: &StringArgs) -> Result<String, CommandError> {
    let mut image = StringImage::encode(&args.text)?;
    let report = apply(&mut image, &args.edits, &args.reads);
    if args.json {
        to_json(&report)
    } else {
        Ok(render(&report, Colors::new(args.color)))
    }
}

/// Apply `edits` in order, then take `reads`.
pub fn apply(image: &mut StringImage, edits: &[Edit], reads: &[Int32]) -> StringReport {
    let mut text = image.view_mut();
    let length = text.length();

    let writes = edits
        .iter()
        .map(|edit| {
            text.set_char(edit.index, edit.unit);
            WriteReport {
                index: edit.index,
                unit: edit.unit,
                applied: (0..length).contains(&edit.index),
            }
        })
        .collect();

    let view = image.view();
    StringReport {
        length: view.length(),
        occupied: image.occupied_size(),
        units: view.to_units(),
        writes,
        reads: reads
            .iter()
            .map(|&index| ReadReport {
                index,
                unit: view.get_char(index),
            })
            .collect(),
    }
}

pub fn render(report: &StringReport, colors: Colors) -> String {
    let mut out = String::new();
    let name = |s: &str| colors.paint(colors.name, format!("{s:<8}"));
    let unit = |u: Char| colors.paint(colors.value, format!("U+{u:04X}"));

    writeln!(out, "{}", colors.paint(colors.dim, "[string]")).unwrap();
    writeln!(
        out,
        "{}  {}",
        name("length"),
        colors.paint(colors.value, report.length)
    )
    .unwrap();
    writeln!(
        out,
        "{}  {}",
        name("occupied"),
        colors.paint(colors.value, report.occupied)
    )
    .unwrap();
    writeln!(
        out,
        "{}  {}",
        name("text"),
        colors.paint(
            colors.value,
            format!("{:?}", String::from_utf16_lossy(&report.units))
        )
    )
    .unwrap();

    if !report.writes.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "{}", colors.paint(colors.dim, "[writes]")).unwrap();
        for write in &report.writes {
            let index = colors.paint(colors.name, format!("{:<4}", write.index));
            if write.applied {
                writeln!(out, "{index}{}", unit(write.unit)).unwrap();
            } else {
                writeln!(
                    out,
                    "{index}{}  {}",
                    unit(write.unit),
                    colors.paint(colors.dim, "skipped")
                )
                .unwrap();
            }
        }
    }

    if !report.reads.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "{}", colors.paint(colors.dim, "[reads]")).unwrap();
        for read in &report.reads {
            let index = colors.paint(colors.name, format!("{:<4}", read.index));
            writeln!(out, "{index}{}", unit(read.unit)).unwrap();
        }
    }

    if !report.units.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "{}", colors.paint(colors.dim, "[units]")).unwrap();
        for (i, row) in report.units.chunks(ROW).enumerate() {
            let hex: Vec<String> = row.iter().map(|u| format!("{u:04x}")).collect();
            writeln!(
                out,
                "{}  {}",
                colors.paint(colors.dim, format!("{:04x}", i * ROW)),
                colors.paint(colors.value, hex.join(" "))
            )
            .unwrap();
        }
    }

    out
}
