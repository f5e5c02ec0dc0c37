//! The recasing engine: applies a [`NameFormat`] to a file or folder name.

use crate::format::NameFormat;

/// Characters stripped from the ends of a fragment before its core is
/// transformed, and re-attached verbatim afterwards. This keeps the
/// scaffolding of identifiers like `[slug]` or `(group)` intact.
fn is_border(c: char) -> bool {
    matches!(c, '_' | '[' | ']' | '(' | ')')
}

/// Recase a name fragment-by-fragment according to a format.
///
/// The name splits on `.`; the extension casing, when the format ends with
/// one, applies to the final fragment of any multi-fragment name. Every
/// other fragment takes the format's casing at its index, with the final
/// casing repeating when the name is longer than the format.
pub fn recase(name: &str, format: &NameFormat) -> String {
    let fragments: Vec<&str> = name.split('.').collect();
    let extension = format.extension();
    let last = fragments.len() - 1;

    let recased: Vec<String> = fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            let casing = match extension {
                Some(ext) if fragments.len() > 1 && i == last => ext,
                _ => format.at(i),
            };

            let (leading, core, trailing) = split_borders(fragment);
            format!("{leading}{}{trailing}", casing.apply(core))
        })
        .collect();

    recased.join(".")
}

/// Split a fragment into its leading border run, transformable core, and
/// trailing border run. A fragment made solely of border characters has an
/// empty core and is preserved as-is.
fn split_borders(fragment: &str) -> (&str, &str, &str) {
    match fragment.find(|c| !is_border(c)) {
        None => (fragment, "", ""),
        Some(start) => {
            let last = fragment.rfind(|c| !is_border(c)).unwrap_or(start);
            let end = last + fragment[last..].chars().next().map_or(1, char::len_utf8);
            (&fragment[..start], &fragment[start..end], &fragment[end..])
        }
    }
}
