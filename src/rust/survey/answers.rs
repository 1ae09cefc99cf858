use std::collections::HashMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::registry::FieldRegistry;

/// Placeholder a form shows before the respondent picks an option.
pub const NOT_ANSWERED: &str = "Select an option";

/// A respondent's raw answer to one question.
///
/// Deserializes from plain JSON values: `null` for unanswered, a string
/// for a single choice, a list of strings for a multi-choice and an
/// integer for a number. Whole-valued floats such as `4.0` are accepted
/// as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(#[serde(deserialize_with = "whole_number")] i64),
    Choice(String),
    Choices(Vec<String>),
    Unanswered,
}

impl RawAnswer {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn choices(values: Vec<impl Into<String>>) -> Self {
        Self::Choices(values.into_iter().map(Into::into).collect())
    }

    /// True when the answer still holds the form's placeholder or carries
    /// nothing to encode.
    pub fn is_unanswered(&self) -> bool {
        match self {
            Self::Unanswered => true,
            Self::Choice(value) => value.is_empty() || value == NOT_ANSWERED,
            Self::Choices(values) => values.iter().all(|v| v.is_empty() || v == NOT_ANSWERED),
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<&str>> for RawAnswer {
    fn from(values: Vec<&str>) -> Self {
        Self::choices(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill all fields before prediction. Missing: {}", .missing.join(", "))]
pub struct IncompleteInputError {
    /// Unanswered field names, in registry order.
    pub missing: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonNumber {
    Int(i64),
    Float(f64),
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match JsonNumber::deserialize(deserializer)? {
        JsonNumber::Int(n) => Ok(n),
        JsonNumber::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        JsonNumber::Float(f) => Err(de::Error::custom(format!("expected a whole number, got {}", f))),
    }
}

/// One respondent's answers, keyed by field name.
///
/// Deserializes from a JSON object; a value that fits no answer shape is
/// reported with the name of its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<String, RawAnswer>,
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let answers = raw
            .into_iter()
            .map(|(field, value)| match RawAnswer::deserialize(value) {
                Ok(answer) => Ok((field, answer)),
                Err(e) => Err(de::Error::custom(format!("Invalid answer for field '{}': {}", field, e))),
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;
        Ok(Self { answers })
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of `registry` set to [`RawAnswer::Unanswered`].
    pub fn blank(registry: &FieldRegistry) -> Self {
        Self {
            answers: registry
                .iter()
                .map(|field| (field.name.to_string(), RawAnswer::Unanswered))
                .collect(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, answer: impl Into<RawAnswer>) -> Self {
        self.set(field, answer);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, answer: impl Into<RawAnswer>) {
        self.answers.insert(field.into(), answer.into());
    }

    pub fn get(&self, field: &str) -> Option<&RawAnswer> {
        self.answers.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<RawAnswer> {
        self.answers.remove(field)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Checks that every registry field holds a usable answer.
    ///
    /// Absent fields, the form placeholder, empty strings and empty
    /// selections all count as missing. Answers for names the registry
    /// does not know are ignored.
    pub fn validate(&self, registry: &FieldRegistry) -> Result<(), IncompleteInputError> {
        let missing: Vec<String> = registry
            .iter()
            .filter(|field| self.get(field.name).map_or(true, RawAnswer::is_unanswered))
            .map(|field| field.name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteInputError { missing })
        }
    }
}

impl<K: Into<String>, V: Into<RawAnswer>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
