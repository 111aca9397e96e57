use crate::core::io::delimited::TaxonFileError;
use thiserror::Error;

/// Which name of a pair failed the length precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Genus,
    Species,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameField::Genus => f.write_str("genus"),
            NameField::Species => f.write_str("species"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error(
        "Record {record}: {field} name '{value}' is too short to encode (needs at least {min} characters)"
    )]
    NameTooShort {
        record: usize,
        field: NameField,
        value: String,
        min: usize,
    },
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read input: {0}")]
    Load(#[source] TaxonFileError),

    #[error("Failed to create codes: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Failed to write output: {0}")]
    Write(#[source] TaxonFileError),
}
