//! Convert command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::ConvertOptions;
use crate::executors::{CommandExecutor, write_output};
use crate::reader::{FamilyDocument, read_family_file};
use crate::utils::string::pluralize;

pub struct ConvertExecutor;

impl ConvertExecutor {
    /// Read the input and return it as a pretty-printed JSON document
    pub fn render(config: &ConvertOptions) -> Result<String> {
        let registry = read_family_file(&config.input, config.format)
            .wrap_err_with(|| format!("Failed to read '{}'", config.input.display()))?;

        eprintln!(
            "{} Converting {} {} to a JSON document...",
            style("🔁").cyan(),
            registry.len(),
            pluralize("person", registry.len())
        );

        let mut json = FamilyDocument::from_registry(&registry)
            .to_json()
            .wrap_err("Failed to serialize the family document")?;
        json.push('\n');
        Ok(json)
    }
}

impl CommandExecutor for ConvertExecutor {
    type Config = ConvertOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let json = Self::render(&config)?;
        write_output(config.output.as_deref(), json.as_bytes())?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Document written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
