mod answers;
pub mod fields;
mod labels;
mod registry;

pub use answers::{AnswerSet, IncompleteInputError, RawAnswer, NOT_ANSWERED};
pub use labels::{decode, DegreeClass, CLASSIFICATION_TABLE, UNKNOWN_LABEL};
pub use registry::{FieldDefinition, FieldKind, FieldRegistry, RegistryError};
