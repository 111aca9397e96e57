use crate::core::io::delimited::DelimitedTaxonFile;
use crate::core::io::traits::TaxonFile;
use crate::core::models::table::{CodeSummary, CodeTable};
use crate::engine::config::EncodeConfig;
use crate::engine::error::WorkflowError;
use crate::engine::generator::generate_codes;
use crate::engine::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct EncodeResult {
    pub table: CodeTable,
    pub summary: CodeSummary,
    pub output_path: PathBuf,
}

/// Loads the pairs, generates their codes and writes the coded table.
///
/// Stages run strictly in sequence; the output file is only touched after
/// loading and generation have both succeeded.
#[instrument(skip_all, name = "encode_workflow", fields(input = %config.input_path.display()))]
pub fn run(config: &EncodeConfig, reporter: &ProgressReporter) -> Result<EncodeResult, WorkflowError> {
    let pairs = reporter.phase("Loading", || {
        DelimitedTaxonFile::read_from_path(&config.input_path).map_err(WorkflowError::Load)
    })?;
    info!(
        "Loaded {} genus/species pair(s) from {:?}.",
        pairs.len(),
        &config.input_path
    );

    let codes = reporter.phase("Generating codes", || {
        generate_codes(&pairs, reporter).map_err(WorkflowError::from)
    })?;
    let table = CodeTable::from_parts(pairs, codes);
    let summary = table.summary();
    info!("Generated codes: {} unique.", summary);

    reporter.phase("Writing", || {
        DelimitedTaxonFile::write_to_path(&table, &config.output_path).map_err(WorkflowError::Write)
    })?;
    info!("Wrote {} record(s) to {:?}.", table.len(), &config.output_path);

    Ok(EncodeResult {
        table,
        summary,
        output_path: config.output_path.clone(),
    })
}
