//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCli};
use crate::config::TreeOptions;
use crate::error::LineageError;

impl FromCli for TreeOptions {
    fn from_cli(cli: Cli) -> Result<Self, LineageError> {
        TreeOptions::builder()
            .with_input(cli.input)
            .with_format(cli.format)
            .with_ancestor(cli.ancestor)
            .with_tree_type(cli.tree_type)
            .with_output(cli.output)
            .with_include_spouses(!cli.hide_spouses)
            .build()
    }
}

crate::impl_try_from_cli!(TreeOptions);

/// Execute the tree command for drawing a family tree
pub fn execute_tree_command(cli: Cli) -> Result<()> {
    let config =
        TreeOptions::from_cli(cli).wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
