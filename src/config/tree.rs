//! Tree command configuration

use std::path::PathBuf;

use crate::cli::{InputFormat, TreeType};
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub input: PathBuf,
    pub format: InputFormat,
    pub ancestor: Option<String>,
    pub tree_type: TreeType,
    pub output: Option<PathBuf>,
    pub include_spouses: bool,
}

impl TreeOptions {
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct TreeOptionsBuilder {
    input: Option<PathBuf>,
    format: Option<InputFormat>,
    ancestor: Option<Option<String>>,
    tree_type: Option<TreeType>,
    output: Option<Option<PathBuf>>,
    include_spouses: Option<bool>,
}

impl TreeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_ancestor(mut self, ancestor: Option<String>) -> Self {
        self.ancestor = Some(ancestor);
        self
    }

    pub fn with_tree_type(mut self, tree_type: TreeType) -> Self {
        self.tree_type = Some(tree_type);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_include_spouses(mut self, include_spouses: bool) -> Self {
        self.include_spouses = Some(include_spouses);
        self
    }
}

impl crate::common::ConfigBuilder for TreeOptionsBuilder {
    type Config = TreeOptions;

    fn build(self) -> Result<Self::Config, crate::error::LineageError> {
        Ok(TreeOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            ancestor: self.ancestor.ok_or_else(|| missing_field("ancestor"))?,
            tree_type: self.tree_type.ok_or_else(|| missing_field("tree_type"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            include_spouses: self.include_spouses.unwrap_or(true),
        })
    }
}
