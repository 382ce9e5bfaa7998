use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lineage",
    about = "🌳 Generate family tree graphs from simple text files",
    long_about = "lineage reads a family description, either the indentation based text format \
                  or a JSON document, and prints a Graphviz DOT graph of the descendants, the \
                  ancestors, or both, of a chosen person. Pipe the output into `dot` to render \
                  an image, for example: lineage -a 'Louis XIV' --format text family.txt | dot \
                  -Tpng -o family.png",
    version
)]
pub struct Cli {
    /// Family description file
    #[arg(value_name = "INPUTFILE", env = "LINEAGE_INPUT")]
    pub input: PathBuf,

    /// Person(s) the tree starts from, by id or exact name; comma separated
    ///
    /// When omitted, the only person of the file without parents is used.
    #[arg(short, long, value_name = "PERSON", env = "LINEAGE_ANCESTOR")]
    pub ancestor: Option<String>,

    /// Format of the input file
    #[arg(
        long,
        value_enum,
        default_value = crate::constants::input::DEFAULT_FORMAT,
        env = "LINEAGE_FORMAT"
    )]
    pub format: InputFormat,

    /// Kind of tree to draw
    #[arg(
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_TREE_TYPE,
        env = "LINEAGE_TREE_TYPE"
    )]
    pub tree_type: TreeType,

    /// Convert the input to the JSON document format instead of drawing a
    /// tree
    #[arg(short, long, env = "LINEAGE_CONVERT")]
    pub convert: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "LINEAGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Do not show the other parent of descendants
    #[arg(long, env = "LINEAGE_HIDE_SPOUSES")]
    pub hide_spouses: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON document with explicit parent references
    Json,
    /// Indentation based text format
    #[value(alias = "old")]
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TreeType {
    /// All descendants of one person
    Family,
    /// All ancestors of one or more persons
    Ancestor,
    /// Ancestors and descendants of one or more persons
    FamilyAncestor,
}

impl TreeType {
    /// Whether a walk of this type may start from several persons
    pub fn accepts_multiple_roots(self) -> bool {
        !matches!(self, TreeType::Family)
    }

    pub fn includes_ancestors(self) -> bool {
        matches!(self, TreeType::Ancestor | TreeType::FamilyAncestor)
    }

    pub fn includes_descendants(self) -> bool {
        matches!(self, TreeType::Family | TreeType::FamilyAncestor)
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}
