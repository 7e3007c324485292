mod cli;
mod commands;
mod logging;

use cli::{LayoutParams, SectionParams, StringParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("layout", m)) => {
            let params = LayoutParams::from_matches(m);
            logging::init(params.verbose);
            commands::layout::run(params.into());
        }
        Some(("section", m)) => {
            let params = SectionParams::from_matches(m);
            logging::init(params.verbose);
            commands::section::run(params.into());
        }
        Some(("string", m)) => {
            let params = StringParams::from_matches(m);
            logging::init(params.verbose);
            commands::string::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
