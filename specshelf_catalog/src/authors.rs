// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Author name cleanup.

use std::collections::HashMap;

use crate::Spec;

/// Splits a raw author field into clean names.
///
/// Entries are separated by `,` or `;`. Email addresses in `<...>` and notes
/// in `(...)` are removed. Entries that are left empty, or that contain
/// anything other than ASCII letters and spaces once accents are folded, are
/// dropped.
///
/// ```
/// use specshelf_catalog::parse_authors;
///
/// let names = parse_authors("Ana García <ana@example.com>; Bo (reviewer), (Author of");
/// assert_eq!(names, ["Ana García", "Bo"]);
/// ```
#[must_use]
pub fn parse_authors(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(strip_annotations)
        .map(|name| name.trim().to_owned())
        .filter(|name| is_plain_name(name))
        .collect()
}

/// Merges author spellings that differ only by case or accents.
///
/// The first spelling seen across `specs`, in order, becomes the one every
/// spec uses. `García`, `Garcia`, and `GARCIA` all collapse to whichever came
/// first.
pub fn unify_authors(specs: &mut [Spec]) {
    let mut canonical: HashMap<String, String> = HashMap::new();
    for spec in specs.iter() {
        for author in &spec.authors {
            canonical
                .entry(fold_name(author))
                .or_insert_with(|| author.clone());
        }
    }
    let mut merged = 0_usize;
    for spec in specs.iter_mut() {
        for author in &mut spec.authors {
            if let Some(preferred) = canonical.get(&fold_name(author))
                && preferred != author
            {
                author.clone_from(preferred);
                merged += 1;
            }
        }
    }
    if merged > 0 {
        tracing::debug!(message = "Unified author spellings", merged);
    }
}

/// Lowercases `name` and folds common Latin accents onto their base letter.
///
/// This is the key used both for author deduplication and for the
/// case-insensitive ordering of names.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.chars().map(fold_char).flat_map(char::to_lowercase).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => 'y',
        other => other,
    }
}

// Removes `(...)` and `<...>` spans. An unclosed opener swallows the rest.
fn strip_annotations(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len());
    let mut closer: Option<char> = None;
    for c in entry.chars() {
        match closer {
            Some(end) if c == end => closer = None,
            Some(_) => {}
            None if c == '(' => closer = Some(')'),
            None if c == '<' => closer = Some('>'),
            None => out.push(c),
        }
    }
    out
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && fold_name(name)
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == ' ')
}
