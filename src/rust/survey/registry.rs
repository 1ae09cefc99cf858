use std::collections::{HashMap, HashSet};
use std::ops::Range;

use lazy_static::lazy_static;

use super::fields::SURVEY_FIELDS;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry must contain at least one field")]
    Empty,
    #[error("Field name cannot be empty")]
    EmptyName,
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),
    #[error("Field '{0}' has an empty category table")]
    EmptyTable(String),
    #[error("Field '{field}' lists category '{category}' more than once")]
    DuplicateCategory { field: String, category: String },
    #[error("Field '{field}' has an inverted scale ({min} > {max})")]
    InvalidScale { field: String, min: i64, max: i64 },
}

/// How a single survey answer expands into the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Label mapped to one integer through an explicit table.
    /// `fallback` is used when the label is not in the table; fields
    /// without a fallback reject unknown labels.
    OrdinalLookup {
        table: &'static [(&'static str, i64)],
        fallback: Option<i64>,
    },
    /// Exactly one category; one slot per category in table order.
    OneHot { categories: &'static [&'static str] },
    /// Any subset of categories; one independent bit per category.
    MultiLabel { categories: &'static [&'static str] },
    /// Integer already on a bounded scale. The range is informational.
    IdentityInt { min: i64, max: i64 },
}

impl FieldKind {
    /// Number of feature slots this kind occupies.
    pub const fn width(&self) -> usize {
        match self {
            Self::OrdinalLookup { .. } | Self::IdentityInt { .. } => 1,
            Self::OneHot { categories } | Self::MultiLabel { categories } => categories.len(),
        }
    }

    pub fn is_multi_label(&self) -> bool {
        matches!(self, Self::MultiLabel { .. })
    }
}

/// One survey question: its key, the prompt shown to the respondent and
/// its encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub prompt: &'static str,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub const fn ordinal(
        name: &'static str,
        prompt: &'static str,
        table: &'static [(&'static str, i64)],
    ) -> Self {
        Self {
            name,
            prompt,
            kind: FieldKind::OrdinalLookup { table, fallback: None },
        }
    }

    pub const fn one_hot(
        name: &'static str,
        prompt: &'static str,
        categories: &'static [&'static str],
    ) -> Self {
        Self { name, prompt, kind: FieldKind::OneHot { categories } }
    }

    pub const fn multi_label(
        name: &'static str,
        prompt: &'static str,
        categories: &'static [&'static str],
    ) -> Self {
        Self { name, prompt, kind: FieldKind::MultiLabel { categories } }
    }

    pub const fn identity_int(name: &'static str, prompt: &'static str, min: i64, max: i64) -> Self {
        Self { name, prompt, kind: FieldKind::IdentityInt { min, max } }
    }

    /// Sets the value used for labels missing from an ordinal table.
    /// Has no effect on other kinds.
    pub const fn with_fallback(mut self, value: i64) -> Self {
        if let FieldKind::OrdinalLookup { table, .. } = self.kind {
            self.kind = FieldKind::OrdinalLookup { table, fallback: Some(value) };
        }
        self
    }

    /// The choices a form should offer for this field, in table order.
    pub fn options(&self) -> Vec<String> {
        match self.kind {
            FieldKind::OrdinalLookup { table, .. } => {
                table.iter().map(|(label, _)| label.to_string()).collect()
            }
            FieldKind::OneHot { categories } | FieldKind::MultiLabel { categories } => {
                categories.iter().map(|c| c.to_string()).collect()
            }
            FieldKind::IdentityInt { min, max } => (min..=max).map(|v| v.to_string()).collect(),
        }
    }

    fn validate(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let labels: Vec<&str> = match self.kind {
            FieldKind::OrdinalLookup { table, .. } => table.iter().map(|(label, _)| *label).collect(),
            FieldKind::OneHot { categories } | FieldKind::MultiLabel { categories } => categories.to_vec(),
            FieldKind::IdentityInt { min, max } => {
                if min > max {
                    return Err(RegistryError::InvalidScale {
                        field: self.name.to_string(),
                        min,
                        max,
                    });
                }
                return Ok(());
            }
        };
        if labels.is_empty() {
            return Err(RegistryError::EmptyTable(self.name.to_string()));
        }
        let mut seen = HashSet::new();
        for label in labels {
            if !seen.insert(label) {
                return Err(RegistryError::DuplicateCategory {
                    field: self.name.to_string(),
                    category: label.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated set of field definitions.
///
/// Field order and category order fix the position of every slot in the
/// feature vector. A trained scaler and model depend on that layout, so a
/// registry must never be reordered once a model has been fitted to it.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
    offsets: Vec<usize>,
    index: HashMap<&'static str, usize>,
    width: usize,
}

lazy_static! {
    static ref SURVEY_REGISTRY: FieldRegistry = FieldRegistry::new(SURVEY_FIELDS.to_vec())
        .expect("Built-in survey registry is invalid");
}

impl FieldRegistry {
    /// Validates `fields` and computes the slot layout.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, RegistryError> {
        if fields.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(fields.len());
        let mut offsets = Vec::with_capacity(fields.len());
        let mut width = 0;
        for (i, field) in fields.iter().enumerate() {
            field.validate()?;
            if index.insert(field.name, i).is_some() {
                return Err(RegistryError::DuplicateField(field.name.to_string()));
            }
            offsets.push(width);
            width += field.kind.width();
        }

        Ok(Self { fields, offsets, index, width })
    }

    /// The degree classification questionnaire the shipped model was trained on.
    pub fn survey() -> &'static FieldRegistry {
        &SURVEY_REGISTRY
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total feature vector width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Positions of a field's slots in the feature vector.
    pub fn slot_range(&self, name: &str) -> Option<Range<usize>> {
        let i = *self.index.get(name)?;
        let start = self.offsets[i];
        Some(start..start + self.fields[i].kind.width())
    }
}
