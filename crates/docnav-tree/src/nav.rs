//! Navigation tree types.

use serde::Serialize;

/// Navigation entry referencing one Markdown file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    /// Display title.
    pub title: String,
    /// Path relative to the documentation root, `/`-separated.
    pub path: String,
}

impl NavLeaf {
    /// Create a leaf.
    #[must_use]
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Navigation group for a directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Directory base name.
    pub title: String,
    /// Landing page, shown before the children and never repeated among them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<NavLeaf>,
    /// Child nodes in directory listing order.
    pub children: Vec<NavNode>,
}

/// Navigation tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Single document.
    Leaf(NavLeaf),
    /// Directory with optional index and children.
    Group(NavGroup),
}

impl NavNode {
    /// Display title of the node.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.title,
            Self::Group(group) => &group.title,
        }
    }

    /// Number of documents referenced by this node and its descendants.
    #[must_use]
    pub fn document_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(group) => {
                usize::from(group.index.is_some())
                    + group
                        .children
                        .iter()
                        .map(NavNode::document_count)
                        .sum::<usize>()
            }
        }
    }
}

impl From<NavLeaf> for NavNode {
    fn from(leaf: NavLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

/// Top-level navigation as serialized to JSON.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Navigation<'a> {
    /// Top-level nodes.
    pub nav: &'a [NavNode],
}
