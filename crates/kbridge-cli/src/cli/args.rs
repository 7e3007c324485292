//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use crate::commands::string::parse_edit;

/// Blob file standing in for a linked section (positional).
pub fn blob_path_arg() -> Arg {
    Arg::new("blob_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Blob file to inspect as a section")
}

/// Text to lay out as a managed string (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("String contents (encoded as UTF-16 code units)")
}

/// Code unit writes (--set INDEX=UNIT).
pub fn set_arg() -> Arg {
    Arg::new("set")
        .long("set")
        .value_name("INDEX=UNIT")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .value_parser(parse_edit)
        .help("Write a code unit (a character or U+XXXX); applied in order")
}

/// Code unit reads (--get INDEX).
pub fn get_arg() -> Arg {
    Arg::new("get")
        .long("get")
        .value_name("INDEX")
        .action(ArgAction::Append)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help("Read a code unit after all writes")
}

/// Number of leading bytes to dump (--head).
pub fn head_arg() -> Arg {
    Arg::new("head")
        .long("head")
        .value_name("BYTES")
        .default_value("64")
        .value_parser(value_parser!(usize))
        .help("Dump this many leading bytes (0 to skip)")
}

/// Emit JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
