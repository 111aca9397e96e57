use crate::cli::Cli;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::path::PathBuf;
use taxocode::engine::progress::ProgressReporter;
use taxocode::workflows::{self, encode::EncodeResult};
use tracing::info;

/// Renders the single notice printed when a run succeeds.
pub fn outcome_message(result: &EncodeResult) -> String {
    format!(
        "Program completed successfully. Unique names generated: {}. Codes written to: {}",
        result.summary,
        result.output_path.display()
    )
}

pub fn run(cli: &Cli, input_arg: Option<PathBuf>) -> Result<EncodeResult> {
    let config = build_config(cli, input_arg)?;
    info!(
        "Encoding {:?} into {:?}.",
        &config.input_path, &config.output_path
    );

    let progress_handler = CliProgressHandler::new(!cli.quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core encode workflow...");
    let result = workflows::encode::run(&config, &reporter)?;
    info!(
        "Workflow finished: {} record(s), {} unique.",
        result.table.len(),
        result.summary
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_input_arg;
    use crate::error::CliError;
    use clap::Parser;
    use std::fs;
    use taxocode::core::io::delimited::TaxonFileError;
    use taxocode::engine::error::WorkflowError;
    use tempfile::tempdir;

    fn run_with(args: &[String]) -> Result<EncodeResult> {
        let cli = Cli::try_parse_from(
            std::iter::once("taxocode".to_string()).chain(args.iter().cloned()),
        )
        .unwrap();
        let input = resolve_input_arg(&cli.inputs)?;
        run(&cli, input)
    }

    #[test]
    fn encodes_file_next_to_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("animals.txt");
        fs::write(&input, "Panthera,leo\nPanthera,tigris\n").unwrap();

        let result = run_with(&["-q".into(), input.display().to_string()]).unwrap();

        let output = dir.path().join("animals.csv");
        assert_eq!(result.output_path, output);
        assert_eq!(result.summary.unique, 2);
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "Panthera,leo,PANLEO,Unique names generated:\nPanthera,tigris,PANTIG,2 of 2\n"
        );
    }

    #[test]
    fn explicit_output_path_is_honoured() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("animals.txt");
        let output = dir.path().join("codes.csv");
        fs::write(&input, "Felis,cat\nFelis,cat\n").unwrap();

        let result = run_with(&[
            "-q".into(),
            "--output".into(),
            output.display().to_string(),
            input.display().to_string(),
        ])
        .unwrap();

        assert_eq!(result.summary.non_unique, 1);
        assert!(output.exists());
        assert!(!dir.path().join("animals.csv").exists());
    }

    #[test]
    fn malformed_input_surfaces_as_workflow_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("animals.txt");
        fs::write(&input, "Panthera,leo,Felis\n").unwrap();

        let err = run_with(&["-q".into(), input.display().to_string()]).unwrap_err();

        assert!(matches!(
            err,
            CliError::Taxocode(WorkflowError::Load(TaxonFileError::InputFormat { .. }))
        ));
        assert!(!dir.path().join("animals.csv").exists());
    }

    #[test]
    fn too_many_paths_fail_before_touching_files() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");
        fs::write(&first, "Panthera,leo\n").unwrap();

        let err = run_with(&[first.display().to_string(), second.display().to_string()])
            .unwrap_err();

        assert!(matches!(err, CliError::Argument(_)));
        assert!(!dir.path().join("a.csv").exists());
    }

    #[test]
    fn outcome_is_one_line_with_summary_and_destination() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("animals.txt");
        fs::write(&input, "Felis,cat\nFelis,cat\nPanthera,leo\n").unwrap();

        let result = run_with(&["-q".into(), input.display().to_string()]).unwrap();
        let message = outcome_message(&result);

        assert_eq!(message.lines().count(), 1);
        assert!(message.starts_with("Program completed successfully."));
        assert!(message.contains("Unique names generated: 2 of 3"));
        assert!(message.ends_with(&dir.path().join("animals.csv").display().to_string()));
    }
}
