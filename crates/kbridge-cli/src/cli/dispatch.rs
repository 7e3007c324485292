//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::layout::LayoutArgs;
use crate::commands::section::SectionArgs;
use crate::commands::string::{Edit, StringArgs};

pub struct LayoutParams {
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl LayoutParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<LayoutParams> for LayoutArgs {
    fn from(p: LayoutParams) -> Self {
        Self {
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SectionParams {
    pub blob_path: PathBuf,
    pub head: usize,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl SectionParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            blob_path: m
                .get_one::<PathBuf>("blob_path")
                .cloned()
                .unwrap_or_default(),
            head: m.get_one::<usize>("head").copied().unwrap_or(64),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<SectionParams> for SectionArgs {
    fn from(p: SectionParams) -> Self {
        Self {
            blob_path: p.blob_path,
            head: p.head,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StringParams {
    pub text: String,
    pub edits: Vec<Edit>,
    pub reads: Vec<i32>,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl StringParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            edits: m
                .get_many::<Edit>("set")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            reads: m
                .get_many::<i32>("get")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<StringParams> for StringArgs {
    fn from(p: StringParams) -> Self {
        Self {
            text: p.text,
            edits: p.edits,
            reads: p.reads,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
