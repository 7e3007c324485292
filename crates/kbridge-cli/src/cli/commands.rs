//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kbridge")
        .about("Inspect managed string layouts and embedded binary sections")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(layout_command())
        .subcommand(section_command())
        .subcommand(string_command())
}

/// Show the managed string layout of this target.
pub fn layout_command() -> Command {
    Command::new("layout")
        .about("Show the managed string layout native code assumes")
        .after_help(
            r#"EXAMPLES:
  kbridge layout           # offsets and sizes
  kbridge layout --json    # machine-readable"#,
        )
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Resolve a blob file the way a linked section is resolved.
pub fn section_command() -> Command {
    Command::new("section")
        .about("Resolve a blob file as a section descriptor")
        .after_help(
            r#"EXAMPLES:
  kbridge section pci.ids              # descriptor and first 64 bytes
  kbridge section pci.ids --head 0     # descriptor only
  kbridge section pci.ids --json"#,
        )
        .arg(blob_path_arg())
        .arg(head_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Lay out text as a managed string and apply reads and writes.
pub fn string_command() -> Command {
    Command::new("string")
        .about("Apply code unit reads and writes to a managed string")
        .after_help(
            r#"EXAMPLES:
  kbridge string 'Hello World' --get 0 --get 11
  kbridge string 'Hello World     ' --set 6=E --set 7=a --set 8=r --set 9=t --set 10=h
  kbridge string 'abc' --set 1=U+263A --json

Out-of-range reads yield U+0000 and out-of-range writes are skipped."#,
        )
        .arg(text_arg())
        .arg(set_arg())
        .arg(get_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
