use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "csv";

/// Derives the destination path for an input file.
///
/// A trailing four-character extension (a dot plus three characters) is
/// removed from the file name and `.csv` is appended. The result sits in the
/// same directory as the input, so `GenusSpecies.csv` maps onto itself.
///
/// The directory part of `input` is kept on purpose: `data/animals.txt`
/// becomes `data/animals.csv`, not `animals.csv` in the working directory.
/// Callers wanting the working directory can set an explicit output path.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = strip_short_extension(&file_name);
    input.with_file_name(format!("{stem}.{OUTPUT_EXTENSION}"))
}

fn strip_short_extension(name: &str) -> &str {
    match name.char_indices().rev().nth(3) {
        Some((idx, '.')) if idx > 0 => &name[..idx],
        _ => name,
    }
}
