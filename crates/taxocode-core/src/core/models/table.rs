use super::record::{EncodedRecord, TaxonCode, TaxonPair};
use std::fmt;

/// Counts of unique and non-unique codes in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeSummary {
    pub total: usize,
    pub unique: usize,
    pub non_unique: usize,
}

impl fmt::Display for CodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.unique, self.total)
    }
}

/// The ordered result of a run: every input pair with its finalized code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    records: Vec<EncodedRecord>,
}

impl CodeTable {
    /// Zips pairs with their codes, keeping input order.
    ///
    /// Both sequences must have the same length; the generator guarantees this
    /// by producing exactly one code per pair.
    pub fn from_parts(pairs: Vec<TaxonPair>, codes: Vec<TaxonCode>) -> Self {
        debug_assert_eq!(pairs.len(), codes.len());
        let records = pairs
            .into_iter()
            .zip(codes)
            .map(|(pair, code)| EncodedRecord { pair, code })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> CodeSummary {
        let total = self.records.len();
        let non_unique = self
            .records
            .iter()
            .filter(|r| !r.code.is_unique())
            .count();
        CodeSummary {
            total,
            unique: total - non_unique,
            non_unique,
        }
    }
}
