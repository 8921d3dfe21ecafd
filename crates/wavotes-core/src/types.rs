//! Core domain types for wavotes
//!
//! These types describe what the CSV loader produces: loosely-typed
//! records keyed by column name, and the bundle of resolutions and votes
//! handed to rendering code.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Column holding a resolution's identifier
pub const ID_FIELD: &str = "id";

/// Column holding a resolution's promotion time in epoch seconds
pub const PROMOTED_FIELD: &str = "promoted";

/// Derived column attached to every resolution record
pub const DATE_PART_FIELD: &str = "date_part";

/// Column holding a resolution's council identifier
pub const COUNCIL_FIELD: &str = "council";

/// Column holding a resolution's comma-joined co-author list
pub const COAUTHOR_FIELD: &str = "coauthor";

/// Column in `votes.csv` naming the voting nation
pub const NATION_FIELD: &str = "nation_id";

/// A parsed data row: column name to cell value
///
/// Records carry no schema. Any column present in the header is present
/// in the record, and values are kept as the trimmed strings found in the
/// file. Columns keep the order they were inserted in, which for parsed
/// rows is header order; serialization emits them in that order.
///
/// # Examples
/// ```
/// use wavotes_core::types::Record;
///
/// let mut record = Record::new();
/// record.insert("id", "42");
/// assert_eq!(record.get("id"), Some("42"));
/// assert_eq!(record.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a column, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.positions
            .get(column)
            .map(|&index| self.columns[index].1.as_str())
    }

    /// Set a column. An existing column keeps its position and gets the
    /// new value; a new column goes last.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.positions.get(&column) {
            Some(&index) => self.columns[index].1 = value,
            None => {
                self.positions.insert(column.clone(), self.columns.len());
                self.columns.push((column, value));
            }
        }
    }

    /// Whether the record has a column with this name
    pub fn contains_key(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns at all
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in &self.columns {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((column, value)) = access.next_entry::<String, String>()? {
                    record.insert(column, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// How a nation voted on a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    For,
    Against,
}

impl VoteChoice {
    /// Interpret a `votes.csv` cell: `1` is for, `0` is against, anything
    /// else (usually empty) means no recorded vote.
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell.trim() {
            "1" => Some(VoteChoice::For),
            "0" => Some(VoteChoice::Against),
            _ => None,
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteChoice::For => write!(f, "For"),
            VoteChoice::Against => write!(f, "Against"),
        }
    }
}

/// Everything the loader produces from `resolutions.csv` and `votes.csv`
///
/// Serialized field names match what browser-side rendering code expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreData {
    /// Resolutions in file order, each with a derived `date_part`
    #[serde(rename = "resolutionsArray")]
    pub resolutions: Vec<Record>,
    /// Resolutions keyed by `id`; later rows win on duplicate ids
    #[serde(rename = "resolutionsMap")]
    pub resolutions_by_id: HashMap<String, Record>,
    /// Raw vote rows in file order
    #[serde(rename = "allVotes")]
    pub all_votes: Vec<Record>,
    /// Column names of `votes.csv` in file order
    #[serde(rename = "votesHeader")]
    pub votes_header: Vec<String>,
}

impl CoreData {
    /// Look up a resolution by identifier
    pub fn resolution(&self, id: &str) -> Option<&Record> {
        self.resolutions_by_id.get(id)
    }
}
