use std::fmt::Write as _;
use std::path::PathBuf;

use kbridge_abi::{FileSection, SectionHandle, SectionProvider};
use kbridge_core::Colors;
use serde::Serialize;

use super::{CommandError, finish, to_json};

const ROW: usize = 16;

pub struct SectionArgs {
    pub blob_path: PathBuf,
    pub head: usize,
    pub json: bool,
    pub color: bool,
}

/// The resolved descriptor. `start` is wherever the blob was loaded, so it
/// only means something for the lifetime of the process.
#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub start: usize,
    pub size: u64,
}

pub fn run(args: SectionArgs) {
    finish(output(&args));
}

pub fn output(args: &SectionArgs) -> Result<String, CommandError> {
    let file = FileSection::load(&args.blob_path).map_err(|source| CommandError::Load {
        path: args.blob_path.clone(),
        source,
    })?;
    let handle = SectionHandle::new(file);

    let section = handle.try_resolve()?;
    let bytes = handle.bytes()?;
    let report = SectionReport {
        name: handle.provider().name().to_string(),
        start: section.start.addr(),
        size: section.size,
    };

    if args.json {
        to_json(&report)
    } else {
        Ok(render(&report, bytes, args.head, Colors::new(args.color)))
    }
}

pub fn render(report: &SectionReport, bytes: &[u8], head: usize, colors: Colors) -> String {
    let mut out = String::new();
    let name = |s: &str| colors.paint(colors.name, format!("{s:<5}"));

    writeln!(out, "{}", colors.paint(colors.dim, "[section]")).unwrap();
    writeln!(
        out,
        "{}  {}",
        name("name"),
        colors.paint(colors.value, &report.name)
    )
    .unwrap();
    writeln!(
        out,
        "{}  {}",
        name("start"),
        colors.paint(colors.dim, format!("{:#x}", report.start))
    )
    .unwrap();
    writeln!(
        out,
        "{}  {}",
        name("size"),
        colors.paint(colors.value, report.size)
    )
    .unwrap();

    let shown = &bytes[..head.min(bytes.len())];
    if shown.is_empty() {
        return out;
    }

    writeln!(out).unwrap();
    writeln!(out, "{}", colors.paint(colors.dim, "[head]")).unwrap();
    for (i, row) in shown.chunks(ROW).enumerate() {
        let hex: Vec<String> = row.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(
            out,
            "{}  {}",
            colors.paint(colors.dim, format!("{:08x}", i * ROW)),
            colors.paint(colors.value, hex.join(" "))
        )
        .unwrap();
    }
    out
}
