//! Index-to-directory pairing by the dotted-suffix naming convention.
//!
//! A flat Markdown file such as `mylib.md` documents the package directory
//! `foo.mylib/`: the directory's *package key* is the last `.`-delimited
//! segment of its name. A directory without dots is its own key, so
//! `sub.md` pairs with `sub/` through the same rule.

use std::collections::BTreeSet;

/// Derive the package key from a directory's base name.
///
/// # Examples
///
/// ```
/// use docnav_tree::package_key;
///
/// assert_eq!(package_key("foo.mylib"), "mylib");
/// assert_eq!(package_key("a.b.c"), "c");
/// assert_eq!(package_key("guide"), "guide");
/// ```
#[must_use]
pub fn package_key(dir_name: &str) -> &str {
    dir_name.rsplit_once('.').map_or(dir_name, |(_, key)| key)
}

/// Check whether a Markdown file title pairs with a directory name.
///
/// True for an exact name match or when the title equals the directory's
/// [`package_key`].
#[must_use]
pub fn pairs_with(title: &str, dir_name: &str) -> bool {
    dir_name == title || package_key(dir_name) == title
}

/// Order in which candidate directories are tried for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    /// First matching directory in listing order, exact or by key.
    Listing,
    /// Exact name matches first, then package key matches, each in listing
    /// order.
    ExactFirst,
}

/// Pair file titles with directory names.
///
/// Both slices must be in listing order. Files are visited in order and
/// each one takes the first directory, in `order`, that is not yet paired,
/// is accepted by `eligible` and [`pairs_with`] its title. A directory is
/// paired at most once.
///
/// Returns `(file_position, dir_position)` pairs into the input slices.
///
/// # Errors
///
/// Propagates the first error returned by `eligible`.
pub fn pair<E>(
    titles: &[&str],
    dir_names: &[&str],
    order: MatchOrder,
    mut eligible: impl FnMut(usize) -> Result<bool, E>,
) -> Result<Vec<(usize, usize)>, E> {
    let mut paired: BTreeSet<&str> = BTreeSet::new();
    let mut pairs = Vec::new();

    for (file_pos, &title) in titles.iter().enumerate() {
        let candidates = candidates(title, dir_names, order);

        for dir_pos in candidates {
            let name = dir_names[dir_pos];
            if paired.contains(name) || !eligible(dir_pos)? {
                continue;
            }
            paired.insert(name);
            pairs.push((file_pos, dir_pos));
            break;
        }
    }

    Ok(pairs)
}

/// Positions of directories pairing with `title`, in trial order.
fn candidates(title: &str, dir_names: &[&str], order: MatchOrder) -> Vec<usize> {
    let matching = dir_names
        .iter()
        .enumerate()
        .filter(|(_, name)| pairs_with(title, name))
        .map(|(pos, _)| pos);

    match order {
        MatchOrder::Listing => matching.collect(),
        MatchOrder::ExactFirst => {
            let (mut exact, by_key): (Vec<usize>, Vec<usize>) =
                matching.partition(|&pos| dir_names[pos] == title);
            exact.extend(by_key);
            exact
        }
    }
}
