//! Guard clause extraction from the raw command line.
//!
//! Guards are free-form phrases, so they are cut out of the original string
//! rather than reassembled from tokens. A clause runs from just after its
//! ` when ` / ` until ` marker to the next marker of either kind, or to the
//! end of the line. Either keyword may come first.

use crate::augmented::GuardKind;

fn marker(kind: GuardKind) -> String {
    format!(" {} ", kind.keyword())
}

/// Raw text of the `kind` clause, trimmed, or `None` if the line has none.
pub(super) fn clause(input: &str, kind: GuardKind) -> Option<&str> {
    let needle = marker(kind);
    let start = input.find(&needle)? + needle.len();
    let rest = &input[start..];

    let end = GuardKind::ALL
        .into_iter()
        .filter_map(|other| rest.find(&marker(other)))
        .min()
        .unwrap_or(rest.len());

    Some(rest[..end].trim())
}

/// Every guard clause present in `input`, `when` first.
pub(super) fn clauses(input: &str) -> impl Iterator<Item = (GuardKind, &str)> {
    GuardKind::ALL
        .into_iter()
        .filter_map(move |kind| clause(input, kind).map(|text| (kind, text)))
}
