//! Turns a validated [`AnswerSet`] into the numeric feature vector the
//! scaler and model were trained on.
//!
//! Each field contributes its slots in registry order:
//!
//! | Kind            | Slots | Value                                          |
//! |-----------------|-------|------------------------------------------------|
//! | `OrdinalLookup` | 1     | table code, field fallback if unmatched        |
//! | `OneHot`        | N     | 1 at the chosen category, all 0 if unmatched   |
//! | `MultiLabel`    | N     | 1 for every selected category                  |
//! | `IdentityInt`   | 1     | the integer answer, unscaled                   |

use std::ops::Deref;

use log::{debug, warn};
use ndarray::{Array1, Array2, Axis};

use crate::survey::{AnswerSet, FieldDefinition, FieldKind, FieldRegistry, RawAnswer};

mod error;
pub(crate) mod utils;

pub use error::EncodeError;

/// Fixed-width model input produced by [`encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f32>);

impl FeatureVector {
    /// Reshapes into a single-row batch, the shape the scaler and model take.
    pub fn into_batch(self) -> Array2<f32> {
        self.0.insert_axis(Axis(0))
    }
}

impl Deref for FeatureVector {
    type Target = Array1<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Encodes every registry field from `answers`, in registry order.
///
/// The answer set is expected to have passed [`AnswerSet::validate`];
/// a missing answer here is reported as [`EncodeError::MissingField`]
/// rather than defaulted.
pub fn encode(registry: &FieldRegistry, answers: &AnswerSet) -> Result<FeatureVector, EncodeError> {
    let mut features = Vec::with_capacity(registry.width());
    for field in registry.iter() {
        let answer = answers
            .get(field.name)
            .filter(|answer| !answer.is_unanswered())
            .ok_or_else(|| EncodeError::MissingField(field.name.to_string()))?;
        features.extend(encode_field(field, answer)?);
    }

    debug_assert_eq!(features.len(), registry.width());
    debug!("Encoded {} fields into {} features", registry.len(), features.len());
    Ok(FeatureVector(Array1::from(features)))
}

/// Encodes a single answer into the slots of `field`.
pub fn encode_field(field: &FieldDefinition, answer: &RawAnswer) -> Result<Vec<f32>, EncodeError> {
    match field.kind {
        FieldKind::OrdinalLookup { table, fallback } => {
            let value = single_value(field, answer)?;
            match utils::ordinal_lookup(&value, table) {
                Some(code) => Ok(vec![code as f32]),
                None => match fallback {
                    Some(code) => {
                        warn!(
                            "Value '{}' for field '{}' is not in its lookup table, using fallback {}",
                            value, field.name, code
                        );
                        Ok(vec![code as f32])
                    }
                    None => Err(EncodeError::UnknownCategory {
                        field: field.name.to_string(),
                        value,
                    }),
                },
            }
        }
        FieldKind::OneHot { categories } => {
            let value = single_value(field, answer)?;
            let encoded = utils::one_hot(&value, categories);
            if !encoded.contains(&1.0) {
                warn!(
                    "Value '{}' for field '{}' matches no category, encoding as all zeros",
                    value, field.name
                );
            }
            Ok(encoded)
        }
        FieldKind::MultiLabel { categories } => {
            let selected = match answer {
                RawAnswer::Choices(values) => values.clone(),
                RawAnswer::Choice(value) => vec![value.clone()],
                _ => {
                    return Err(EncodeError::KindMismatch {
                        field: field.name.to_string(),
                        expected: "a list of choices",
                    })
                }
            };
            for unknown in selected.iter().filter(|s| !categories.contains(&s.as_str())) {
                warn!("Ignoring unknown selection '{}' for field '{}'", unknown, field.name);
            }
            Ok(utils::multi_label(&selected, categories))
        }
        FieldKind::IdentityInt { .. } => {
            let value = match answer {
                RawAnswer::Number(n) => *n,
                RawAnswer::Choice(text) => {
                    text.trim().parse::<i64>().map_err(|_| EncodeError::InvalidInteger {
                        field: field.name.to_string(),
                        value: text.clone(),
                    })?
                }
                _ => {
                    return Err(EncodeError::KindMismatch {
                        field: field.name.to_string(),
                        expected: "an integer",
                    })
                }
            };
            Ok(vec![value as f32])
        }
    }
}

/// Text of a single-choice answer. Numbers match table labels by their
/// decimal form, so `2021` and `"2021"` select the same entry.
fn single_value(field: &FieldDefinition, answer: &RawAnswer) -> Result<String, EncodeError> {
    match answer {
        RawAnswer::Choice(value) => Ok(value.clone()),
        RawAnswer::Number(n) => Ok(n.to_string()),
        RawAnswer::Choices(_) | RawAnswer::Unanswered => Err(EncodeError::KindMismatch {
            field: field.name.to_string(),
            expected: "a single choice",
        }),
    }
}
