//! Command implementations for the lineage CLI
//!
//! - tree: draw the descendants and/or ancestors of a person as a DOT graph
//! - convert: rewrite an input file as a JSON family document

pub mod convert;
pub mod tree;

use miette::Result;

use crate::cli::Cli;

/// Execute the command selected on the command line
pub fn execute_command(cli: Cli) -> Result<()> {
    if cli.convert {
        convert::execute_convert_command(cli)
    } else {
        tree::execute_tree_command(cli)
    }
}
