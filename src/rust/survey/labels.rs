use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// Returned by [`decode`] for codes outside the label table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Degree classification predicted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DegreeClass {
    PassClass,
    SecondClassLower,
    SecondClassUpper,
    FirstClass,
}

/// Model output code for each classification.
pub const CLASSIFICATION_TABLE: [(i64, DegreeClass); 4] = [
    (1, DegreeClass::PassClass),
    (2, DegreeClass::SecondClassLower),
    (3, DegreeClass::SecondClassUpper),
    (4, DegreeClass::FirstClass),
];

impl DegreeClass {
    pub const ALL: [DegreeClass; 4] = [
        Self::PassClass,
        Self::SecondClassLower,
        Self::SecondClassUpper,
        Self::FirstClass,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        CLASSIFICATION_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, class)| *class)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.label() == label)
    }

    pub fn code(self) -> i64 {
        match self {
            Self::PassClass => 1,
            Self::SecondClassLower => 2,
            Self::SecondClassUpper => 3,
            Self::FirstClass => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PassClass => "Pass Class",
            Self::SecondClassLower => "Second Class Lower",
            Self::SecondClassUpper => "Second Class Upper",
            Self::FirstClass => "First Class",
        }
    }
}

impl fmt::Display for DegreeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a model output code to its classification name, or
/// [`UNKNOWN_LABEL`] when the code is not in the table.
pub fn decode(code: i64) -> &'static str {
    match DegreeClass::from_code(code) {
        Some(class) => class.label(),
        None => {
            warn!("Model returned unknown classification code {}", code);
            UNKNOWN_LABEL
        }
    }
}
