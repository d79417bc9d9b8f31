//! Navigation serialization.
//!
//! Two formats are supported:
//!
//! - [`OutputFormat::Mkdocs`]: the `nav:` block of an `mkdocs.yml`. Every
//!   string is double-quoted. A group's index is emitted as a bare path item
//!   before its children.
//! - [`OutputFormat::Json`]: `{"nav": [...]}` with leaves as `{title, path}`
//!   and groups as `{title, index?, children}`.

use std::fmt::Write;

use crate::error::{NavError, NavErrorKind};
use crate::nav::{NavNode, Navigation};

/// Indentation unit for nested items.
const INDENT: &str = "  ";

/// Serialization format for the navigation tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `MkDocs` `nav:` YAML block.
    #[default]
    Mkdocs,
    /// Pretty-printed JSON.
    Json,
}

/// Render navigation nodes in the given format.
///
/// # Errors
///
/// Returns [`NavError`] if JSON serialization fails.
pub fn render(nodes: &[NavNode], format: OutputFormat) -> Result<String, NavError> {
    match format {
        OutputFormat::Mkdocs => Ok(render_mkdocs(nodes)),
        OutputFormat::Json => render_json(nodes),
    }
}

/// Render navigation as an `MkDocs` `nav:` block.
///
/// ```
/// use docnav_tree::{render_mkdocs, NavLeaf};
///
/// let nav = vec![NavLeaf::new("Home", "index.md").into()];
/// assert_eq!(render_mkdocs(&nav), "nav:\n  - \"Home\": \"index.md\"\n");
/// ```
#[must_use]
pub fn render_mkdocs(nodes: &[NavNode]) -> String {
    let mut out = String::from("nav:\n");
    for node in nodes {
        write_node(&mut out, node, 1);
    }
    out
}

/// Render navigation as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`NavError`] if serialization fails.
pub fn render_json(nodes: &[NavNode]) -> Result<String, NavError> {
    let mut json = serde_json::to_string_pretty(&Navigation { nav: nodes })
        .map_err(|e| NavError::new(NavErrorKind::Other).with_source(e))?;
    json.push('\n');
    Ok(json)
}

fn write_node(out: &mut String, node: &NavNode, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        NavNode::Leaf(leaf) => {
            let _ = writeln!(out, "{indent}- {}: {}", quote(&leaf.title), quote(&leaf.path));
        }
        NavNode::Group(group) => {
            let _ = writeln!(out, "{indent}- {}:", quote(&group.title));
            if let Some(index) = &group.index {
                let _ = writeln!(out, "{indent}{INDENT}- {}", quote(&index.path));
            }
            for child in &group.children {
                write_node(out, child, depth + 1);
            }
        }
    }
}

/// YAML double-quoted scalar.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::nav::{NavGroup, NavLeaf};

    fn sample() -> Vec<NavNode> {
        vec![
            NavLeaf::new("Home", "index.md").into(),
            NavGroup {
                title: "engine.db".to_owned(),
                index: Some(NavLeaf::new("db", "db.md")),
                children: vec![
                    NavLeaf::new("a", "engine.db/a.md").into(),
                    NavGroup {
                        title: "internals".to_owned(),
                        index: None,
                        children: vec![NavLeaf::new("wal", "engine.db/internals/wal.md").into()],
                    }
                    .into(),
                ],
            }
            .into(),
        ]
    }

    #[test]
    fn test_render_mkdocs_layout() {
        let expected = "\
nav:
  - \"Home\": \"index.md\"
  - \"engine.db\":
    - \"db.md\"
    - \"a\": \"engine.db/a.md\"
    - \"internals\":
      - \"wal\": \"engine.db/internals/wal.md\"
";
        assert_eq!(render_mkdocs(&sample()), expected);
    }

    #[test]
    fn test_render_mkdocs_empty() {
        assert_eq!(render_mkdocs(&[]), "nav:\n");
    }

    #[test]
    fn test_render_mkdocs_is_valid_yaml() {
        let nodes = vec![
            NavLeaf::new("say \"hi\"", "quotes.md").into(),
            NavLeaf::new("back\\slash: colon", "odd.md").into(),
        ];

        let yaml: serde_yaml::Value = serde_yaml::from_str(&render_mkdocs(&nodes)).unwrap();

        let items = yaml["nav"].as_sequence().unwrap();
        assert_eq!(items[0]["say \"hi\""], "quotes.md");
        assert_eq!(items[1]["back\\slash: colon"], "odd.md");
    }

    #[test]
    fn test_render_mkdocs_group_parses_as_nested_sequence() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&render_mkdocs(&sample())).unwrap();

        let group = yaml["nav"][1]["engine.db"].as_sequence().unwrap();
        assert_eq!(group[0], "db.md");
        assert_eq!(group[1]["a"], "engine.db/a.md");
        assert_eq!(group[2]["internals"][0]["wal"], "engine.db/internals/wal.md");
    }

    #[test]
    fn test_quote_escapes_control_characters() {
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
        assert_eq!(quote("bell\u{7}"), "\"bell\\u0007\"");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        assert!(json.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nav"][0]["title"], "Home");
        assert_eq!(value["nav"][0]["path"], "index.md");
        assert_eq!(value["nav"][1]["title"], "engine.db");
        assert_eq!(value["nav"][1]["index"]["path"], "db.md");
        assert_eq!(value["nav"][1]["children"][1]["children"][0]["title"], "wal");
        assert!(value["nav"][1]["children"][1].get("index").is_none());
    }
}
