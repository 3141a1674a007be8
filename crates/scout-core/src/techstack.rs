//! Parsing of the free-text tech stack field.

/// Split a declared tech stack into technology names.
///
/// Commas and semicolons both separate entries. Entries are trimmed and empty
/// ones dropped; order and case are preserved.
#[must_use]
pub fn parse_techstack(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}
