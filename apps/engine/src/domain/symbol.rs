//! Core symbol type: one fingerspelled letter, or the Unknown sentinel.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

/// Letters the trainer can practise, in catalog order.
pub const FINGERSPELLING_ALPHABET: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Letters whose sign is a movement; the learner holds the end position.
const MOTION_LETTERS: [&str; 2] = ["J", "Z"];

const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_GLYPH: &str = "questionmark";

/// A practicable symbol (or the Unknown sentinel).
///
/// `glyph` and `tutorial_asset` are opaque keys resolved by the presentation
/// layer. Two symbols are equal when their canonical names are equal.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    glyph: String,
    tutorial_asset: Option<String>,
}

impl Symbol {
    /// Build a practicable letter; glyph and tutorial asset are keyed by name.
    pub fn letter(name: &str) -> Self {
        let name = canonical_name(name);
        Self {
            glyph: name.clone(),
            tutorial_asset: Some(name.clone()),
            name,
        }
    }

    /// The sentinel for "no meaningful identification".
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            glyph: UNKNOWN_GLYPH.to_string(),
            tutorial_asset: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn tutorial_asset(&self) -> Option<&str> {
        self.tutorial_asset.as_deref()
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_NAME
    }

    /// True for letters signed with a movement (J, Z).
    pub fn requires_motion(&self) -> bool {
        MOTION_LETTERS.contains(&self.name.as_str())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)
    }
}

/// Canonical form used for every name comparison: trimmed, first character
/// upper-case, the rest lower-case.
pub fn canonical_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// True when `raw` canonicalises to the sentinel's name.
pub fn is_unknown_name(raw: &str) -> bool {
    canonical_name(raw) == UNKNOWN_NAME
}
