//! Tree command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::TreeOptions;
use crate::executors::{CommandExecutor, write_output};
use crate::graph::GraphRenderer;
use crate::reader::read_family_file;
use crate::resolver::RootResolver;
use crate::utils::string::pluralize;
use crate::walker::{TreeWalker, WalkEvent};

pub struct TreeExecutor;

impl TreeExecutor {
    /// Run the whole pipeline and return the DOT text
    pub fn render(config: &TreeOptions) -> Result<Vec<u8>> {
        let registry = read_family_file(&config.input, config.format)
            .wrap_err_with(|| format!("Failed to read '{}'", config.input.display()))?;

        let resolved = RootResolver::new(&registry)
            .resolve(config.ancestor.as_deref(), config.tree_type)
            .wrap_err("Failed to find the root of the tree")?;

        for ignored in &resolved.ignored {
            eprintln!(
                "{} Ignoring \"{}\": a {} tree starts from a single person",
                style("⚠").yellow(),
                ignored,
                config.tree_type
            );
        }

        let root_names: Vec<&str> = resolved
            .roots
            .iter()
            .map(|&root| registry.person(root).name())
            .collect();
        eprintln!(
            "{} Drawing {} tree of {}...",
            style("🌳").green(),
            config.tree_type,
            style(root_names.join(", ")).bold()
        );

        let events = TreeWalker::new(&registry)
            .with_spouses(config.include_spouses)
            .walk(&resolved.roots, config.tree_type);

        let persons = events
            .iter()
            .filter(|event| matches!(event, WalkEvent::Node(_)))
            .count();
        eprintln!(
            "{} {} {} in the tree",
            style("✓").green(),
            persons,
            pluralize("person", persons)
        );

        let mut output = Vec::new();
        GraphRenderer::new()
            .render_dot(&events, &mut output)
            .wrap_err("Failed to render DOT graph")?;
        Ok(output)
    }
}

impl CommandExecutor for TreeExecutor {
    type Config = TreeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let output = Self::render(&config)?;
        write_output(config.output.as_deref(), &output)?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
