//! Navigation tree building for Markdown documentation directories.
//!
//! This crate turns a directory of Markdown files into the ordered, nested
//! navigation consumed by a static-site generator such as `MkDocs`:
//!
//! - [`Classifier`] lists one directory in byte-wise name order, separates
//!   Markdown files from subdirectories and pairs index files with
//!   subdirectories
//! - [`NavBuilder`] recursively builds [`NavNode`] trees, eliding
//!   directories without documentation
//! - [`render`] serializes the tree as an `MkDocs` `nav:` block or JSON
//!
//! # Index pairing
//!
//! A Markdown file becomes the index of a sibling directory when its title
//! equals the directory name or the directory's [`package_key`] (the part
//! after the last `.`), provided the directory has Markdown beneath it. So
//! `db.md` is the index of `engine.db/`, and `sub.md` is the index of `sub/`.
//! At the root a file takes the first matching directory in listing order;
//! below the root exact name matches are preferred (see [`MatchOrder`]).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use docnav_tree::{render, NavBuilder, NavOptions, OutputFormat};
//!
//! let nav = NavBuilder::new(Path::new("docs"), NavOptions::default()).build()?;
//! print!("{}", render(&nav, OutputFormat::Mkdocs)?);
//! # Ok::<(), docnav_tree::NavError>(())
//! ```

mod builder;
mod classifier;
mod error;
mod nav;
mod package;
mod render;

pub use builder::{NavBuilder, NavOptions};
pub use classifier::{
    Classification, Classifier, ClassifierOptions, DocEntry, EntryKind, Listing,
};
pub use error::{NavError, NavErrorKind};
pub use nav::{NavGroup, NavLeaf, NavNode, Navigation};
pub use package::{MatchOrder, package_key, pair, pairs_with};
pub use render::{OutputFormat, render, render_json, render_mkdocs};
