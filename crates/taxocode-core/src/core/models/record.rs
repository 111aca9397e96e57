use std::fmt;

/// Suffix appended to a code when no unique candidate could be found.
pub const NON_UNIQUE_MARKER: &str = "***";

/// A single (genus, species) row read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonPair {
    pub genus: String,
    pub species: String,
}

impl TaxonPair {
    pub fn new(genus: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            genus: genus.into(),
            species: species.into(),
        }
    }
}

/// A finalized short code for one pair.
///
/// `base` is always the six-character uppercase candidate. Codes that could not
/// be made unique render with [`NON_UNIQUE_MARKER`] appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonCode {
    base: String,
    unique: bool,
}

impl TaxonCode {
    pub fn unique(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            unique: true,
        }
    }

    pub fn non_unique(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            unique: false,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }
}

impl fmt::Display for TaxonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unique {
            f.write_str(&self.base)
        } else {
            write!(f, "{}{}", self.base, NON_UNIQUE_MARKER)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    pub pair: TaxonPair,
    pub code: TaxonCode,
}
