//! Short-code generation with uniqueness resolution.
//!
//! A code is the first three letters of the genus, the first two letters of
//! the species and one further species letter, upper-cased. The further
//! letter starts at the third species letter and walks forward whenever the
//! candidate collides with a code already handed out in the same run. When
//! the species runs out of letters the last candidate is kept and marked as
//! non-unique.

use crate::core::models::record::{TaxonCode, TaxonPair};
use crate::engine::error::{EncodingError, NameField};
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::HashSet;
use tracing::debug;

const GENUS_PREFIX_LEN: usize = 3;
const SPECIES_PREFIX_LEN: usize = 2;

/// 1-based position of the first species letter tried as the final character.
const FIRST_SUFFIX_POSITION: usize = 3;

pub const MIN_GENUS_LEN: usize = GENUS_PREFIX_LEN;
// A two-letter species has no letter left for the final character.
pub const MIN_SPECIES_LEN: usize = FIRST_SUFFIX_POSITION;

/// Checks that every pair is long enough to be encoded.
///
/// Record numbers in the returned error are 1-based.
pub fn validate_pairs(pairs: &[TaxonPair]) -> Result<(), EncodingError> {
    pairs
        .iter()
        .enumerate()
        .try_for_each(|(i, pair)| check_pair(i + 1, pair))
}

fn check_pair(record: usize, pair: &TaxonPair) -> Result<(), EncodingError> {
    check_name(record, NameField::Genus, &pair.genus, MIN_GENUS_LEN)?;
    check_name(record, NameField::Species, &pair.species, MIN_SPECIES_LEN)
}

fn check_name(record: usize, field: NameField, value: &str, min: usize) -> Result<(), EncodingError> {
    if value.chars().count() < min {
        return Err(EncodingError::NameTooShort {
            record,
            field,
            value: value.to_string(),
            min,
        });
    }
    Ok(())
}

/// Hands out codes for one run, remembering everything it has assigned.
///
/// Pairs must already have passed [`validate_pairs`]; `generate_codes` runs
/// it over the whole input before the first assignment.
#[derive(Debug, Default)]
pub(crate) struct CodeGenerator {
    assigned: HashSet<String>,
    non_unique: usize,
}

impl CodeGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Finalizes the code for the next pair in input order.
    pub(crate) fn assign(&mut self, pair: &TaxonPair) -> TaxonCode {
        let genus: Vec<char> = pair.genus.chars().collect();
        let species: Vec<char> = pair.species.chars().collect();
        let prefix: String = genus[..GENUS_PREFIX_LEN]
            .iter()
            .chain(&species[..SPECIES_PREFIX_LEN])
            .collect();

        let mut candidate = String::new();
        for position in FIRST_SUFFIX_POSITION..=species.len() {
            candidate = format!("{prefix}{}", species[position - 1]).to_uppercase();
            if self.assigned.insert(candidate.clone()) {
                debug!(
                    "Assigned '{}' to {} {} at position {}.",
                    candidate, pair.genus, pair.species, position
                );
                return TaxonCode::unique(candidate);
            }
        }

        self.non_unique += 1;
        TaxonCode::non_unique(candidate)
    }

    pub(crate) fn non_unique_count(&self) -> usize {
        self.non_unique
    }
}

/// Produces one code per pair, in order.
///
/// All pairs are validated before any code is generated, so a short name
/// anywhere in the input aborts the whole run.
pub fn generate_codes(
    pairs: &[TaxonPair],
    reporter: &ProgressReporter,
) -> Result<Vec<TaxonCode>, EncodingError> {
    validate_pairs(pairs)?;

    reporter.report(Progress::TaskStart {
        total_steps: pairs.len() as u64,
    });

    let mut generator = CodeGenerator::new();
    let mut codes = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let code = generator.assign(pair);
        if !code.is_unique() {
            debug!(
                "No unique code available for {} {}; using '{}'.",
                pair.genus, pair.species, code
            );
            reporter.report(Progress::Message(format!(
                "{} {} -> {} (not unique)",
                pair.genus, pair.species, code
            )));
        }
        codes.push(code);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    debug!(
        "Generated {} code(s), {} non-unique.",
        codes.len(),
        generator.non_unique_count()
    );
    Ok(codes)
}
