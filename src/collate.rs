//! Locale-aware title ordering.
//!
//! Titles are compared the way a reader expects an index to read rather than
//! by code point: accents and case are ignored first (`"Élan"` files under
//! E, `"beta"` next to `"Beta"`), and only titles that are identical under
//! that folding are split further — unaccented before accented, lowercase
//! before uppercase.

use deunicode::deunicode;
use std::cmp::Ordering;

/// Compare two titles for an A→Z listing.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| variant_marks(a).cmp(&variant_marks(b)))
}

/// Primary collation key: transliterated, lowercased, alphanumerics and
/// single spaces only.
fn fold(s: &str) -> String {
    let ascii = deunicode(s).to_lowercase();
    let mut out = String::with_capacity(ascii.len());
    for word in ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Tie-break marks per character: (is accented, is uppercase).
fn variant_marks(s: &str) -> Vec<(bool, bool)> {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| (!c.is_ascii(), c.is_uppercase()))
        .collect()
}
