//! Navigation tree builder.
//!
//! Converts a documentation directory into navigation nodes in one
//! depth-first pass. Each recursive call classifies its directory, builds
//! its subdirectories, and returns its own slice of the tree; nothing is
//! shared between calls.
//!
//! # Ordering
//!
//! A group's children follow the classifier's listing order, with every
//! subdirectory group placed at the subdirectory's position. Only the
//! top-level nodes are re-sorted, by title, so that top-level navigation does
//! not depend on on-disk names of paired package directories.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use docnav_tree::{NavBuilder, NavOptions};
//!
//! let builder = NavBuilder::new(Path::new("docs"), NavOptions::default());
//! let nav = builder.build()?;
//! for node in &nav {
//!     println!("{}", node.title());
//! }
//! # Ok::<(), docnav_tree::NavError>(())
//! ```

use std::path::{Component, Path, PathBuf};

use crate::classifier::{Classification, Classifier, ClassifierOptions, DocEntry, EntryKind};
use crate::error::NavError;
use crate::nav::{NavGroup, NavLeaf, NavNode};
use crate::package::MatchOrder;

/// Options for navigation building.
#[derive(Debug, Clone)]
pub struct NavOptions {
    /// Entry classification options.
    pub classifier: ClassifierOptions,
    /// Title shown for the root home page.
    pub home_title: String,
    /// Root file title (without extension) that is the home page.
    pub index_name: String,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            classifier: ClassifierOptions::default(),
            home_title: "Home".to_owned(),
            index_name: "index".to_owned(),
        }
    }
}

/// Builds navigation trees rooted at a documentation directory.
pub struct NavBuilder {
    root: PathBuf,
    classifier: Classifier,
    home_title: String,
    index_name: String,
}

impl NavBuilder {
    /// Create a builder for the documentation root `root`.
    #[must_use]
    pub fn new(root: &Path, options: NavOptions) -> Self {
        Self {
            root: root.to_path_buf(),
            classifier: Classifier::new(options.classifier),
            home_title: options.home_title,
            index_name: options.index_name,
        }
    }

    /// Build the top-level navigation, sorted by title.
    ///
    /// Directories without Markdown anywhere beneath them are elided. A root
    /// file takes the first matching directory in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the root or any directory beneath it cannot be
    /// listed. No partial tree is returned.
    pub fn build(&self) -> Result<Vec<NavNode>, NavError> {
        let classification = self.classifier.classify(&self.root, MatchOrder::Listing)?;
        let mut nodes = self.build_children(&classification, true)?;

        // Stable: equal titles keep listing order.
        nodes.sort_by(|a, b| a.title().cmp(b.title()));

        tracing::info!(
            root = %self.root.display(),
            nodes = nodes.len(),
            documents = nodes.iter().map(NavNode::document_count).sum::<usize>(),
            "Built navigation"
        );
        Ok(nodes)
    }

    /// Build the group for `dir`, with an optional index supplied by the
    /// parent's pairing step.
    ///
    /// Returns `None` when the directory has neither an index nor any child
    /// node.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if `dir` or any directory beneath it cannot be
    /// listed.
    pub fn build_group(
        &self,
        dir: &Path,
        index: Option<NavLeaf>,
    ) -> Result<Option<NavNode>, NavError> {
        let classification = self.classifier.classify(dir, MatchOrder::ExactFirst)?;
        let children = self.build_children(&classification, false)?;

        if index.is_none() && children.is_empty() {
            tracing::debug!(dir = %dir.display(), "Eliding directory without documentation");
            return Ok(None);
        }

        Ok(Some(NavNode::Group(NavGroup {
            title: dir_title(dir),
            index,
            children,
        })))
    }

    /// Build child nodes of one classified directory in listing order.
    fn build_children(
        &self,
        classification: &Classification,
        top_level: bool,
    ) -> Result<Vec<NavNode>, NavError> {
        let mut children = Vec::with_capacity(classification.entries.len());

        for (pos, entry) in classification.entries.iter().enumerate() {
            match entry.kind {
                EntryKind::File => {
                    if classification.is_index(pos) {
                        continue;
                    }
                    let mut leaf = self.leaf(entry);
                    if top_level && leaf.title == self.index_name {
                        leaf.title.clone_from(&self.home_title);
                    }
                    children.push(NavNode::Leaf(leaf));
                }
                EntryKind::Directory => {
                    let index = classification.index_of(pos).map(|file| self.leaf(file));
                    if let Some(group) = self.build_group(&entry.path, index)? {
                        children.push(group);
                    }
                }
            }
        }

        Ok(children)
    }

    fn leaf(&self, entry: &DocEntry) -> NavLeaf {
        NavLeaf::new(
            entry.title(self.classifier.extension()),
            self.relative_path(&entry.path),
        )
    }

    /// Path relative to the root, joined with `/` on every platform.
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn dir_title(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
