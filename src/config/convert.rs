//! Convert command configuration

use std::path::PathBuf;

use crate::cli::InputFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub format: InputFormat,
    pub output: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ConvertOptionsBuilder {
    input: Option<PathBuf>,
    format: Option<InputFormat>,
    output: Option<Option<PathBuf>>,
}

impl ConvertOptionsBuilder {
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

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for ConvertOptionsBuilder {
    type Config = ConvertOptions;

    fn build(self) -> Result<Self::Config, crate::error::LineageError> {
        Ok(ConvertOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}
