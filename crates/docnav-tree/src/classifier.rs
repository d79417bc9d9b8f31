//! Directory classification.
//!
//! The classifier lists the direct entries of one directory in a total,
//! stable order (byte-wise by name), keeps Markdown files and
//! subdirectories, and decides which Markdown file is the index of which
//! subdirectory. Nothing is cached between calls: every listing reflects the
//! filesystem at the time of the call.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NavError;
use crate::package::{self, MatchOrder};

/// Kind of a classified entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with the Markdown extension.
    File,
    /// Directory.
    Directory,
}

/// A Markdown file or directory under the documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Entry name as listed (e.g., `guide.md`, `engine.db`).
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
}

impl DocEntry {
    /// Display title: file name without extension, or the directory name.
    #[must_use]
    pub fn title<'a>(&'a self, extension: &str) -> &'a str {
        match self.kind {
            EntryKind::File => self
                .name
                .strip_suffix(extension)
                .and_then(|stem| stem.strip_suffix('.'))
                .unwrap_or(&self.name),
            EntryKind::Directory => &self.name,
        }
    }

    fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Options controlling which entries are classified.
#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    /// Markdown extension without the leading dot.
    pub extension: String,
    /// Whether entries starting with `.` are listed (default: true).
    pub include_hidden: bool,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_owned(),
            include_hidden: true,
        }
    }
}

/// Sorted Markdown files and subdirectories of one directory.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Entries in byte-wise name order.
    pub entries: Vec<DocEntry>,
}

impl Listing {
    /// Markdown files in listing order.
    pub fn files(&self) -> impl Iterator<Item = &DocEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    /// Subdirectories in listing order.
    pub fn dirs(&self) -> impl Iterator<Item = &DocEntry> {
        self.entries.iter().filter(|e| e.is_dir())
    }
}

/// A listing plus the index pairing between its files and subdirectories.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Entries in byte-wise name order.
    pub entries: Vec<DocEntry>,
    /// Directory position in `entries` -> position of its index file.
    index_of_dir: HashMap<usize, usize>,
    /// File position in `entries` -> position of the directory it indexes.
    dir_of_index: HashMap<usize, usize>,
}

impl Classification {
    /// Index file paired with the directory at `dir_pos`, if any.
    #[must_use]
    pub fn index_of(&self, dir_pos: usize) -> Option<&DocEntry> {
        self.index_of_dir
            .get(&dir_pos)
            .map(|&file_pos| &self.entries[file_pos])
    }

    /// Whether the file at `file_pos` is consumed as a directory index.
    #[must_use]
    pub fn is_index(&self, file_pos: usize) -> bool {
        self.dir_of_index.contains_key(&file_pos)
    }

    #[cfg(test)]
    fn pair_count(&self) -> usize {
        self.index_of_dir.len()
    }
}

/// Classifies directory entries for navigation building.
#[derive(Debug, Clone)]
pub struct Classifier {
    options: ClassifierOptions,
    suffix: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierOptions::default())
    }
}

impl Classifier {
    /// Create a classifier with the given options.
    #[must_use]
    pub fn new(options: ClassifierOptions) -> Self {
        let suffix = format!(".{}", options.extension);
        Self { options, suffix }
    }

    /// Markdown extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.options.extension
    }

    /// List Markdown files and subdirectories of `dir`, sorted by name.
    ///
    /// Hidden entries are skipped when disabled in the options. Symlinks are followed;
    /// dangling ones are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] with kind `NotFound` or `NotADirectory` if `dir`
    /// cannot be listed, `MalformedEntry` if an entry name is not UTF-8, or
    /// the mapped I/O kind for any other listing failure.
    pub fn list(&self, dir: &Path) -> Result<Listing, NavError> {
        let meta = fs::metadata(dir).map_err(|e| NavError::io(e, dir))?;
        if !meta.is_dir() {
            return Err(NavError::not_a_directory(dir));
        }

        let read_dir = fs::read_dir(dir).map_err(|e| NavError::io(e, dir))?;
        let mut entries = Vec::new();

        for entry in read_dir {
            let entry = entry.map_err(|e| NavError::io(e, dir))?;
            let path = entry.path();
            let Ok(name) = entry.file_name().into_string() else {
                return Err(NavError::malformed_entry(path));
            };

            if !self.options.include_hidden && name.starts_with('.') {
                continue;
            }

            let mut file_type = entry.file_type().map_err(|e| NavError::io(e, &path))?;
            if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(target) => file_type = target.file_type(),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Skipping dangling symlink");
                        continue;
                    }
                }
            }

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() && name.ends_with(&self.suffix) {
                EntryKind::File
            } else {
                continue;
            };

            entries.push(DocEntry { name, path, kind });
        }

        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Ok(Listing { entries })
    }

    /// Check whether `dir` contains a Markdown file anywhere beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if any directory in the subtree cannot be listed.
    pub fn contains_markdown(&self, dir: &Path) -> Result<bool, NavError> {
        let listing = self.list(dir)?;
        if listing.files().next().is_some() {
            return Ok(true);
        }
        for sub in listing.dirs() {
            if self.contains_markdown(&sub.path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// List `dir` and pair its Markdown files with subdirectories.
    ///
    /// A file becomes the index of a subdirectory when its title pairs with
    /// the subdirectory name (see [`package::pairs_with`]) and the
    /// subdirectory contains Markdown transitively. `order` decides which of
    /// several matching subdirectories a file takes.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if `dir` or any inspected subdirectory cannot be
    /// listed. Classification never partially succeeds.
    pub fn classify(
        &self,
        dir: &Path,
        order: MatchOrder,
    ) -> Result<Classification, NavError> {
        let Listing { entries } = self.list(dir)?;

        let file_positions: Vec<usize> = positions(&entries, EntryKind::File);
        let dir_positions: Vec<usize> = positions(&entries, EntryKind::Directory);
        let titles: Vec<&str> = file_positions
            .iter()
            .map(|&pos| entries[pos].title(&self.options.extension))
            .collect();
        let dir_names: Vec<&str> = dir_positions
            .iter()
            .map(|&pos| entries[pos].name.as_str())
            .collect();

        let mut has_docs: HashMap<usize, bool> = HashMap::new();
        let eligible = |dir_idx: usize| -> Result<bool, NavError> {
            if let Some(&known) = has_docs.get(&dir_idx) {
                return Ok(known);
            }
            let found = self.contains_markdown(&entries[dir_positions[dir_idx]].path)?;
            has_docs.insert(dir_idx, found);
            Ok(found)
        };
        let pairs = package::pair(&titles, &dir_names, order, eligible)?;

        let mut index_of_dir = HashMap::with_capacity(pairs.len());
        let mut dir_of_index = HashMap::with_capacity(pairs.len());
        for (file_idx, dir_idx) in pairs {
            let file_pos = file_positions[file_idx];
            let dir_pos = dir_positions[dir_idx];
            tracing::debug!(
                index = %entries[file_pos].name,
                dir = %entries[dir_pos].name,
                "Paired index with directory"
            );
            index_of_dir.insert(dir_pos, file_pos);
            dir_of_index.insert(file_pos, dir_pos);
        }

        tracing::debug!(
            dir = %dir.display(),
            files = file_positions.len(),
            dirs = dir_positions.len(),
            indexes = index_of_dir.len(),
            "Classified directory"
        );

        Ok(Classification {
            entries,
            index_of_dir,
            dir_of_index,
        })
    }
}

fn positions(entries: &[DocEntry], kind: EntryKind) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.kind == kind)
        .map(|(pos, _)| pos)
        .collect()
}
