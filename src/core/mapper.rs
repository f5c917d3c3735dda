//! Path mapper module.
//!
//! Converts name pairs into absolute source/target path pairs. Purely
//! syntactic: no filesystem access and no existence checks.

use crate::models::pair::{FilePair, NamePair};
use std::path::Path;

/// Map name pairs onto absolute file pairs.
///
/// `source` is always `source_root/original_name`. A `new_name` containing
/// `/` is split on the first occurrence only, so `"A/B/C.mkv"` maps to
/// `target_root/A/B/C.mkv`. Produces exactly one pair per input, preserving
/// order.
pub fn map_pairs(name_pairs: &[NamePair], source_root: &Path, target_root: &Path) -> Vec<FilePair> {
    name_pairs
        .iter()
        .map(|pair| {
            let source = source_root.join(&pair.original_name);
            let target = match pair.new_name.split_once('/') {
                Some((subdir, rest)) => target_root.join(subdir).join(rest),
                None => target_root.join(&pair.new_name),
            };
            FilePair { source, target }
        })
        .collect()
}
