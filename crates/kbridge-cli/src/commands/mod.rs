pub mod layout;
pub mod section;
pub mod string;

#[cfg(test)]
mod layout_tests;

use std::path::PathBuf;

use kbridge_abi::{ImageError, SectionError};
use serde::Serialize;

/// Failure of a command before anything is printed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: SectionError,
    },
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty JSON with a trailing newline.
pub fn to_json(value: &impl Serialize) -> Result<String, CommandError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Print a command's output, or report its error and exit 1.
pub fn finish(output: Result<String, CommandError>) {
    match output {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
