//! Convert command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCli};
use crate::config::ConvertOptions;
use crate::error::LineageError;

impl FromCli for ConvertOptions {
    fn from_cli(cli: Cli) -> Result<Self, LineageError> {
        ConvertOptions::builder()
            .with_input(cli.input)
            .with_format(cli.format)
            .with_output(cli.output)
            .build()
    }
}

crate::impl_try_from_cli!(ConvertOptions);

/// Execute the convert command for rewriting a file as a JSON document
pub fn execute_convert_command(cli: Cli) -> Result<()> {
    let config =
        ConvertOptions::from_cli(cli).wrap_err("Failed to parse convert command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::convert::ConvertExecutor;
    ConvertExecutor::execute(config)
}
