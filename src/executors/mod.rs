//! Command executors that handle the actual logic for each command

pub mod convert;
pub mod tree;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Write a fully rendered result to `output`, or to stdout
///
/// Callers render into memory first so that a failing run never leaves
/// partial output behind.
pub(crate) fn write_output(output: Option<&Path>, contents: &[u8]) -> Result<()> {
    match output {
        Some(path) => fs::write(path, contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write output file '{}'", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents)
                .and_then(|_| stdout.flush())
                .into_diagnostic()
                .wrap_err("Failed to write to stdout")
        }
    }
}
