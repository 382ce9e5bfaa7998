//! Reader for the line-oriented indentation format
//!
//! ```text
//! # comments and blank lines are ignored, blank lines also end a family
//! Louis XIV (M, birthday=1638)
//! Maria Theresa of Spain (F)
//!     Louis de France (M, id=LouisGrandDauphin)
//!     + Maria Anna Victoria of Bavaria (F)
//!         Louis de France, Duke of Burgundy (M)
//! ```
//!
//! Unindented lines of a block are the parents of every line indented one
//! level below them. An indented line is the anchor for the lines one level
//! deeper; a `+` line joins the anchor above it as a second parent.

use crate::constants::text_format::{INDENT_WIDTH, RESERVED_ATTRIBUTES, SPOUSE_MARKER};
use crate::core::{Person, Sex};
use crate::error::{LineageError, ParseError};
use crate::reader::{FamilyReader, reject_cycles};
use crate::registry::{PersonIndex, PersonRegistry};

/// Parses the indentation format
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReader;

/// One person line, before it is attached to the registry
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    depth: usize,
    spouse: bool,
    person: Person,
    explicit_id: bool,
}

impl FamilyReader for TextReader {
    fn read(&self, file: &str, source: &str) -> Result<PersonRegistry, LineageError> {
        let mut registry = PersonRegistry::new();
        // groups[d] holds the persons whose children are the lines at depth d + 1
        let mut groups: Vec<Vec<PersonIndex>> = Vec::new();

        for (number, line) in source.lines().enumerate() {
            let line_number = number + 1;
            let content = line.trim();
            if content.is_empty() {
                groups.clear();
                continue;
            }
            if content.starts_with('#') {
                continue;
            }

            let error = |message: String| ParseError::at_line(file, source, line_number, message);

            let entry = parse_line(line).map_err(error)?;
            let index = registry
                .insert(entry.person, entry.explicit_id)
                .map_err(|e| error(e.to_string()))?;
            attach(&mut registry, &mut groups, entry.depth, entry.spouse, index).map_err(error)?;
        }

        reject_cycles(&registry, file, source)?;
        Ok(registry)
    }
}

fn attach(
    registry: &mut PersonRegistry,
    groups: &mut Vec<Vec<PersonIndex>>,
    depth: usize,
    spouse: bool,
    index: PersonIndex,
) -> Result<(), String> {
    if depth == 0 {
        if spouse {
            return Err(format!(
                "'{SPOUSE_MARKER}' marks a second parent of an indented line; list top-level \
                 parents without it"
            ));
        }
        if groups.len() > 1 {
            return Err(
                "a parent line cannot follow children in the same family; separate families \
                 with a blank line"
                    .to_string(),
            );
        }
        match groups.first_mut() {
            Some(parents) => parents.push(index),
            None => groups.push(vec![index]),
        }
        return Ok(());
    }

    if spouse {
        if groups.len() != depth + 1 {
            return Err(format!(
                "no person at indentation level {depth} to pair this spouse with"
            ));
        }
        groups[depth].push(index);
        return Ok(());
    }

    if depth > groups.len() {
        return Err(match groups.len() {
            0 => "indented line has no parent line above it".to_string(),
            deepest => format!(
                "line is at indentation level {depth} but the deepest parent line above it is \
                 at level {}",
                deepest - 1
            ),
        });
    }

    for &parent in &groups[depth - 1] {
        registry.add_parent_child(parent, index);
    }
    groups.truncate(depth);
    groups.push(vec![index]);
    Ok(())
}

fn parse_line(line: &str) -> Result<Entry, String> {
    let content = line.trim_start_matches([' ', '\t']);
    let indentation = &line[..line.len() - content.len()];
    if indentation.contains('\t') {
        return Err("tabs are not allowed in indentation, use 4 spaces per level".to_string());
    }
    if indentation.len() % INDENT_WIDTH != 0 {
        return Err(format!(
            "unparseable indentation level: {} spaces is not a multiple of {INDENT_WIDTH}",
            indentation.len()
        ));
    }
    let depth = indentation.len() / INDENT_WIDTH;

    let content = content.trim_end();
    let (spouse, description) = match content.strip_prefix(SPOUSE_MARKER) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, content),
    };

    let (person, explicit_id) = parse_person(description)?;
    Ok(Entry {
        depth,
        spouse,
        person,
        explicit_id,
    })
}

/// Parse `Name (attr, key=value, ...)`
fn parse_person(description: &str) -> Result<(Person, bool), String> {
    let (name, attributes) = match description.split_once('(') {
        Some((name, rest)) => {
            let attributes = rest
                .strip_suffix(')')
                .ok_or_else(|| "attribute list is not closed by ')' at end of line".to_string())?;
            (name.trim(), Some(attributes))
        }
        None => (description.trim(), None),
    };

    if name.is_empty() {
        return Err("missing person name".to_string());
    }

    let mut person = Person::new(name);
    let mut explicit_id = false;

    for attribute in attributes
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|attribute| !attribute.is_empty())
    {
        match attribute.split_once('=') {
            Some((key, value)) => {
                let (key, value) = (key.trim(), value.trim());
                match key {
                    "" => return Err(format!("attribute \"{attribute}\" has no name")),
                    "id" if value.is_empty() => return Err("empty id attribute".to_string()),
                    "id" => {
                        person = person.with_id(value);
                        explicit_id = true;
                    }
                    "sex" => person = person.with_sex(Some(Sex::from(value.to_string()))),
                    key if RESERVED_ATTRIBUTES.contains(&key) => {
                        return Err(format!("\"{key}\" cannot be used as an attribute name"));
                    }
                    key => person = person.with_attribute(key, value),
                }
            }
            None => match attribute {
                "M" => person = person.with_sex(Some(Sex::Male)),
                "F" => person = person.with_sex(Some(Sex::Female)),
                flag if RESERVED_ATTRIBUTES.contains(&flag) => {
                    return Err(format!("\"{flag}\" cannot be used as an attribute name"));
                }
                flag => person = person.with_attribute(flag, "true"),
            },
        }
    }

    Ok((person, explicit_id))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn read(source: &str) -> Result<PersonRegistry, LineageError> {
        TextReader.read("family.txt", source)
    }

    fn parse_error(source: &str) -> Box<ParseError> {
        match read(source) {
            Err(LineageError::ParseError(error)) => error,
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    fn children(registry: &PersonRegistry, id: &str) -> Vec<String> {
        let index = registry.get(id).unwrap();
        registry
            .children_of(index)
            .into_iter()
            .map(|child| registry.person(child).id().to_string())
            .collect()
    }

    #[test]
    fn test_parse_person_attributes() {
        let (person, explicit_id) =
            parse_person("Louis XIV (M, id=L14, birthday=5 September 1638, twin)").unwrap();

        assert!(explicit_id);
        assert_eq!(person.id(), "L14");
        assert_eq!(person.name(), "Louis XIV");
        assert_eq!(person.sex(), Some(&Sex::Male));
        assert_eq!(person.attribute("birthday"), Some("5 September 1638"));
        assert_eq!(person.attribute("twin"), Some("true"));
    }

    #[test]
    fn test_parse_person_without_attributes() {
        let (person, explicit_id) = parse_person("Maria Theresa").unwrap();

        assert!(!explicit_id);
        assert_eq!(person.id(), "MariaTheresa");
        assert!(person.attributes().is_empty());
    }

    #[test]
    fn test_parse_person_errors() {
        assert!(parse_person("(M)").is_err());
        assert!(parse_person("Anne (F").is_err());
        assert!(parse_person("Anne (id=)").is_err());
        assert!(parse_person("Anne (=x)").is_err());
        assert!(parse_person("Anne (parents=x)").is_err());
    }

    #[test]
    fn test_household_block() {
        let registry = read(
            "# The Sun King\n\
             Louis XIV (M)\n\
             Maria Theresa (F)\n\
             \x20   Louis (M)\n\
             \x20   Anne Elisabeth (F)\n",
        )
        .unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(children(&registry, "LouisXIV"), vec!["Louis", "AnneElisabeth"]);
        assert_eq!(children(&registry, "MariaTheresa"), vec!["Louis", "AnneElisabeth"]);
    }

    #[test]
    fn test_nested_generations_with_spouse() {
        let registry = read(
            "A\n\
             \x20   B\n\
             \x20   + E\n\
             \x20       D\n\
             \x20   C\n",
        )
        .unwrap();

        assert_eq!(children(&registry, "A"), vec!["B", "C"]);
        assert_eq!(children(&registry, "B"), vec!["D"]);
        assert_eq!(children(&registry, "E"), vec!["D"]);
        assert!(children(&registry, "C").is_empty());
    }

    #[test]
    fn test_repeated_person_is_merged() {
        let registry = read(
            "A (M)\n\
             \x20   B\n\
             \n\
             B (birthday=1700)\n\
             \x20   C\n",
        )
        .unwrap();

        assert_eq!(registry.len(), 3);
        let b = registry.person(registry.get("B").unwrap());
        assert_eq!(b.attribute("birthday"), Some("1700"));
        assert_eq!(children(&registry, "A"), vec!["B"]);
        assert_eq!(children(&registry, "B"), vec!["C"]);
    }

    #[test]
    fn test_reference_by_name_to_person_with_explicit_id() {
        let registry = read(
            "Louis XIV (id=L14)\n\
             \x20   Louis\n\
             \n\
             Louis XIV\n\
             \x20   Anne\n",
        )
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(children(&registry, "L14"), vec!["Louis", "Anne"]);
    }

    #[test]
    fn test_blank_line_starts_new_family() {
        let registry = read("A\n\nB\n    C\n").unwrap();

        assert!(children(&registry, "A").is_empty());
        assert_eq!(children(&registry, "B"), vec!["C"]);
    }

    #[test]
    fn test_over_indented_line_is_rejected() {
        let error = parse_error("A\n    B\n                C\n");

        assert_eq!(error.line, Some(3));
        assert!(error.message.contains("level 4"), "{}", error.message);
    }

    #[test]
    fn test_child_without_parent_is_rejected() {
        let error = parse_error("# header\n    orphan\n");
        assert_eq!(error.line, Some(2));
    }

    #[test]
    fn test_uneven_indentation_is_rejected() {
        let error = parse_error("A\n  B\n");
        assert_eq!(error.line, Some(2));
        assert!(error.message.contains("indentation"));
    }

    #[test]
    fn test_tab_indentation_is_rejected() {
        let error = parse_error("A\n\tB\n");
        assert_eq!(error.line, Some(2));
    }

    #[test]
    fn test_parent_after_children_is_rejected() {
        let error = parse_error("A\n    B\nC\n");
        assert_eq!(error.line, Some(3));
    }

    #[test]
    fn test_spouse_without_anchor_is_rejected() {
        let error = parse_error("A\n    B\n        + C\n");
        assert_eq!(error.line, Some(3));
    }

    #[test]
    fn test_top_level_spouse_is_rejected() {
        let error = parse_error("A\n+ B\n    C\n");
        assert_eq!(error.line, Some(2));
        assert!(error.message.contains("second parent"));
    }

    #[test]
    fn test_names_without_ascii_alphanumerics_keep_distinct_ids() {
        let registry = TextReader.read("family.txt", "李\n王\n    Anna\n").unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.relationships(),
            vec![("李", "Anna"), ("王", "Anna")]
        );
    }

    #[test]
    fn test_conflicting_name_is_rejected() {
        let error = parse_error("Anne Marie\n    B\n\nAnne-Marie\n");
        assert_eq!(error.line, Some(4));
        assert!(error.message.contains("AnneMarie"));
    }

    #[test]
    fn test_own_ancestor_is_rejected() {
        let error = parse_error("A\n    B\n\nB\n    A\n");
        assert_eq!(error.line, None);
        assert!(error.message.contains("own ancestor"));
    }
}
