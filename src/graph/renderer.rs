use std::io::Write;

use miette::Result;

use crate::constants::output::GRAPH_NAME;
use crate::core::{Person, Sex};
use crate::error::LineageError;
use crate::walker::WalkEvent;

mod colors {
    pub const FEMALE_FILL: &str = "bisque";
    pub const MALE_FILL: &str = "azure2";
    pub const DEFAULT_FILL: &str = "white";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LineageError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LineageError::from)
    };
}

/// Writes walk events as a Graphviz DOT graph
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_dot(&self, events: &[WalkEvent], output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph {GRAPH_NAME} {{")?;
        writeln_out!(output, "    nodesep=0.5;")?;
        writeln_out!(output, "    ranksep=1.5;")?;
        writeln_out!(output, "    node [shape=note];")?;
        writeln_out!(output, "    edge [dir=none];")?;
        writeln_out!(output)?;

        for event in events {
            match event {
                WalkEvent::Node(person) => {
                    writeln_out!(
                        output,
                        r#"    "{}" [label="{}", style=filled, fillcolor={}];"#,
                        escape(person.id()),
                        node_label(person),
                        fill_color(person.sex())
                    )?;
                }
                WalkEvent::Edge { parent, child } => {
                    writeln_out!(output, r#"    "{}" -> "{}";"#, escape(parent), escape(child))?;
                }
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

/// Multi-line label of a person, already escaped for a DOT string
fn node_label(person: &Person) -> String {
    let attribute = |key| person.attribute(key);

    let mut title = person.name().to_string();
    if let Some(pretitle) = attribute("pretitle") {
        title = format!("{pretitle} {title}");
    }
    if let Some(posttitle) = attribute("posttitle") {
        title = format!("{title} {posttitle}");
    }

    let mut lines = vec![title];
    if let Some(surname) = attribute("surname") {
        lines.push(format!("« {surname} »"));
    }
    if let Some(nee) = attribute("nee") {
        lines.push(format!("Geb. {nee}"));
    }
    lines.extend(life_event('*', attribute("birthday"), attribute("birthplace")));
    lines.extend(life_event('†', attribute("deathday"), attribute("deathplace")));
    if let Some(notes) = attribute("notes") {
        lines.push(notes.to_string());
    }

    lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("\\n")
}

fn life_event(symbol: char, date: Option<&str>, place: Option<&str>) -> Option<String> {
    match (date, place) {
        (Some(date), Some(place)) => Some(format!("{symbol} {date} in {place}")),
        (Some(date), None) => Some(format!("{symbol} {date}")),
        (None, Some(place)) => Some(format!("{symbol} in {place}")),
        (None, None) => None,
    }
}

fn fill_color(sex: Option<&Sex>) -> &'static str {
    match sex {
        Some(Sex::Female) => colors::FEMALE_FILL,
        Some(Sex::Male) => colors::MALE_FILL,
        _ => colors::DEFAULT_FILL,
    }
}

/// Escape text for use inside a double-quoted DOT string
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
