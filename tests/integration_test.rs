//! Integration tests for lineage using the library interface

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use lineage::cli::{InputFormat, TreeType};
use lineage::common::ConfigBuilder;
use lineage::config::{ConvertOptions, TreeOptions};
use lineage::error::LineageError;
use lineage::executors::convert::ConvertExecutor;
use lineage::executors::tree::TreeExecutor;
use lineage::reader::{FamilyReader, JsonReader, TextReader, read_family_file};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn tree_options(
    input: PathBuf,
    format: InputFormat,
    ancestor: Option<&str>,
    tree_type: TreeType,
) -> TreeOptions {
    TreeOptions::builder()
        .with_input(input)
        .with_format(format)
        .with_ancestor(ancestor.map(str::to_string))
        .with_tree_type(tree_type)
        .with_output(None)
        .build()
        .unwrap()
}

fn render(options: &TreeOptions) -> miette::Result<String> {
    let output = TreeExecutor::render(options)?;
    Ok(String::from_utf8(output).unwrap())
}

/// Identifiers declared as nodes, in output order
fn node_ids(dot: &str) -> Vec<String> {
    dot.lines()
        .filter(|line| line.contains("[label="))
        .map(|line| line.trim().split('"').nth(1).unwrap().to_string())
        .collect()
}

fn edge_lines(dot: &str) -> Vec<String> {
    dot.lines()
        .filter(|line| line.contains(" -> "))
        .map(|line| line.trim().to_string())
        .collect()
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_fixture_registry_has_no_duplicates() {
    let registry = read_family_file(&fixture("louis_xiv.txt"), InputFormat::Text).unwrap();

    let ids: Vec<&str> = registry.persons().map(|(_, person)| person.id()).collect();
    let unique: BTreeSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(registry.len(), 14);

    // "Louis XIV" appears twice and is merged
    let louis = registry.person(registry.get("LouisXIV").unwrap());
    assert_eq!(louis.attribute("surname"), Some("The Sun King"));
    assert_eq!(registry.children_of(registry.get("LouisXIV").unwrap()).len(), 2);
}

#[test]
fn test_descendant_tree_of_louis_xiv() {
    let dot = render(&tree_options(
        fixture("louis_xiv.txt"),
        InputFormat::Text,
        Some("Louis XIV"),
        TreeType::Family,
    ))
    .unwrap();

    assert!(dot.starts_with("digraph family {"));
    assert!(dot.trim_end().ends_with('}'));

    let nodes = node_ids(&dot);
    assert_eq!(nodes[0], "LouisXIV");
    assert!(nodes.contains(&"LouisXV".to_string()));
    assert!(nodes.contains(&"MariaTheresaofSpain".to_string()));
    assert!(!nodes.contains(&"LouisXIII".to_string()));

    let edges = edge_lines(&dot);
    assert!(edges.contains(&r#""LouisXIV" -> "GrandDauphin";"#.to_string()));
    assert!(edges.contains(&r#""Burgundy" -> "LouisXV";"#.to_string()));
    assert!(edges.contains(&r#""MarieAdelaide" -> "LouisXV";"#.to_string()));
}

#[test]
fn test_ancestor_tree_of_two_cousins() {
    let dot = render(&tree_options(
        fixture("louis_xiv.txt"),
        InputFormat::Text,
        Some("GrandDauphin,PhilippeII"),
        TreeType::Ancestor,
    ))
    .unwrap();

    let nodes = node_ids(&dot);
    let louis_xiii = nodes.iter().filter(|id| *id == "LouisXIII").count();
    assert_eq!(louis_xiii, 1);
    assert_eq!(
        nodes,
        vec![
            "GrandDauphin",
            "PhilippeII",
            "LouisXIV",
            "MariaTheresaofSpain",
            "PhilippeI",
            "Liselotte",
            "LouisXIII",
            "AnneofAustria",
        ]
    );
}

#[test]
fn test_combined_tree_is_union_of_both_walks() {
    let input = fixture("louis_xiv.txt");
    let nodes_of = |tree_type| -> BTreeSet<String> {
        let options = tree_options(
            input.clone(),
            InputFormat::Text,
            Some("GrandDauphin"),
            tree_type,
        );
        node_ids(&render(&options).unwrap()).into_iter().collect()
    };

    let ancestors = nodes_of(TreeType::Ancestor);
    let descendants = nodes_of(TreeType::Family);
    let combined = nodes_of(TreeType::FamilyAncestor);

    let union: BTreeSet<String> = ancestors.union(&descendants).cloned().collect();
    assert_eq!(combined, union);
}

#[test]
fn test_example_order_from_text_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "abcd.txt", "A\n    B\n        D\n    C\n");

    let dot = render(&tree_options(input, InputFormat::Text, None, TreeType::Family)).unwrap();

    assert_eq!(node_ids(&dot), vec!["A", "B", "C", "D"]);
    assert_eq!(
        edge_lines(&dot),
        vec![r#""A" -> "B";"#, r#""A" -> "C";"#, r#""B" -> "D";"#]
    );
}

#[test]
fn test_missing_root_is_reported() {
    let error = render(&tree_options(
        fixture("louis_xiv.txt"),
        InputFormat::Text,
        Some("Napoleon"),
        TreeType::Family,
    ))
    .unwrap_err();

    let error = error.downcast_ref::<LineageError>().unwrap();
    assert!(matches!(error, LineageError::PersonNotFound { query } if query == "Napoleon"));
}

#[test]
fn test_ambiguous_root_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "johns.json",
        r#"{"individuals": [
            {"id": "John1", "name": "John"},
            {"id": "John2", "name": "John", "parents": ["John1"]}
        ]}"#,
    );

    let error = render(&tree_options(input, InputFormat::Json, Some("John"), TreeType::Family))
        .unwrap_err();

    match error.downcast_ref::<LineageError>().unwrap() {
        LineageError::AmbiguousPerson { candidates, .. } => {
            assert_eq!(candidates, &vec!["John1".to_string(), "John2".to_string()]);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_root_is_discovered_when_unique() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "single.txt", "Adam\n    Cain\n    Abel\n");

    let dot = render(&tree_options(
        input,
        InputFormat::Text,
        None,
        TreeType::FamilyAncestor,
    ))
    .unwrap();
    assert_eq!(node_ids(&dot), vec!["Adam", "Cain", "Abel"]);
}

#[test]
fn test_root_discovery_fails_with_two_parents() {
    let error = render(&tree_options(
        fixture("louis_xiv.txt"),
        InputFormat::Text,
        None,
        TreeType::Family,
    ))
    .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<LineageError>(),
        Some(LineageError::NoRootSpecified { .. })
    ));
}

#[test]
fn test_parse_error_names_offending_line() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "broken.txt", "A\n    B\n                    C\n");

    let error = read_family_file(&input, InputFormat::Text).unwrap_err();
    match error {
        LineageError::ParseError(error) => assert_eq!(error.line, Some(3)),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_convert_round_trip_is_lossless() {
    let options = ConvertOptions::builder()
        .with_input(fixture("louis_xiv.txt"))
        .with_format(InputFormat::Text)
        .with_output(None)
        .build()
        .unwrap();
    let json = ConvertExecutor::render(&options).unwrap();

    let source = fs::read_to_string(fixture("louis_xiv.txt")).unwrap();
    let direct = TextReader.read("louis_xiv.txt", &source).unwrap();
    let converted = JsonReader.read("louis_xiv.json", &json).unwrap();

    let persons = |registry: &lineage::registry::PersonRegistry| {
        registry
            .persons()
            .map(|(_, person)| person.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(persons(&converted), persons(&direct));

    let edges = |registry: &lineage::registry::PersonRegistry| {
        registry
            .relationships()
            .into_iter()
            .map(|(parent, child)| (parent.to_string(), child.to_string()))
            .collect::<BTreeSet<_>>()
    };
    assert_eq!(edges(&converted), edges(&direct));
}

#[test]
fn test_tree_from_json_matches_tree_from_text() {
    let dir = TempDir::new().unwrap();
    let options = ConvertOptions::builder()
        .with_input(fixture("louis_xiv.txt"))
        .with_format(InputFormat::Text)
        .with_output(None)
        .build()
        .unwrap();
    let json_path = write_file(&dir, "louis_xiv.json", &ConvertExecutor::render(&options).unwrap());

    let from_text = render(&tree_options(
        fixture("louis_xiv.txt"),
        InputFormat::Text,
        Some("LouisXIII"),
        TreeType::FamilyAncestor,
    ))
    .unwrap();
    let from_json = render(&tree_options(
        json_path,
        InputFormat::Json,
        Some("LouisXIII"),
        TreeType::FamilyAncestor,
    ))
    .unwrap();

    assert_eq!(from_json, from_text);
}
