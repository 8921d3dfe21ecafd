//! Chamber labels for World Assembly council identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two World Assembly chambers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chamber {
    /// General Assembly, council `1`
    #[serde(rename = "GA")]
    GeneralAssembly,
    /// Security Council, council `2`
    #[serde(rename = "SC")]
    SecurityCouncil,
}

impl Chamber {
    /// Map a council identifier to its chamber
    pub fn from_council_id(council_id: &str) -> Option<Self> {
        match council_id {
            "1" => Some(Chamber::GeneralAssembly),
            "2" => Some(Chamber::SecurityCouncil),
            _ => None,
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Chamber::GeneralAssembly => "GA",
            Chamber::SecurityCouncil => "SC",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chamber label for a council identifier, or an empty string when the
/// identifier is not one of the two known councils.
///
/// ```
/// use wavotes_core::chamber::get_chamber;
///
/// assert_eq!(get_chamber("1"), "GA");
/// assert_eq!(get_chamber("2"), "SC");
/// assert_eq!(get_chamber("3"), "");
/// ```
pub fn get_chamber(council_id: &str) -> &'static str {
    Chamber::from_council_id(council_id).map_or("", |c| c.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_councils() {
        assert_eq!(get_chamber("1"), "GA");
        assert_eq!(get_chamber("2"), "SC");
    }

    #[test]
    fn test_unknown_councils() {
        assert_eq!(get_chamber("3"), "");
        assert_eq!(get_chamber(""), "");
        assert_eq!(get_chamber(" 1"), "");
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Chamber::SecurityCouncil.to_string(), "SC");
        assert_eq!(
            Chamber::from_council_id("1"),
            Some(Chamber::GeneralAssembly)
        );
    }
}
