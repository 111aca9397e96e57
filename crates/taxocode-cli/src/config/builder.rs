use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use std::path::PathBuf;
use taxocode::core::io::paths::derive_output_path;
use taxocode::engine::config::{EncodeConfig, EncodeConfigBuilder};
use tracing::debug;

/// Picks the input path from the positional arguments.
///
/// Performs no I/O, so it can run before anything else touches the disk.
pub fn resolve_input_arg(inputs: &[PathBuf]) -> Result<Option<PathBuf>> {
    match inputs {
        [] => Ok(None),
        [path] => Ok(Some(path.clone())),
        many => Err(CliError::Argument(format!(
            "Improper number of arguments. Expected at most one input path, got {}.",
            many.len()
        ))),
    }
}

pub fn build_config(cli: &Cli, input_arg: Option<PathBuf>) -> Result<EncodeConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let input_file = file_config.input.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let input_path = input_arg
        .or(input_file.default_path)
        .unwrap_or(defaults.input_path);
    let output_path = cli
        .output
        .clone()
        .or(output_file.path)
        .unwrap_or_else(|| derive_output_path(&input_path));
    debug!("Resolved input {:?} and output {:?}.", input_path, output_path);

    Ok(EncodeConfigBuilder::new()
        .input_path(input_path)
        .output_path(output_path)
        .build()?)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "input.default-path" => {
                config.input.get_or_insert_with(Default::default).default_path =
                    Some(PathBuf::from(value));
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
