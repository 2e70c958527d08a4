//! Map region labels to canonical state identifiers.

/// Labels that do not match their canonical identifier after case folding.
///
/// The Putrajaya & Selangor joint label collapses to `putrajaya`.
const RENAMES: &[(&str, &str)] = &[
    ("malacca", "melaka"),
    ("kualalumpur", "kuala-lumpur"),
    ("putrajayaand-selangor", "putrajaya"),
    ("putrajaya-selangor", "putrajaya"),
    ("putrajaya-and-selangor", "putrajaya"),
];

/// Canonicalize a state label: lowercase, spaces to hyphens, `&` to `and`,
/// then apply the rename table. Unknown labels pass through.
pub fn canonical_state(label: &str) -> String {
    let folded = label
        .trim()
        .to_lowercase()
        .replace(' ', "-")
        .replace('&', "and");

    RENAMES
        .iter()
        .find(|(from, _)| *from == folded)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(folded)
}
