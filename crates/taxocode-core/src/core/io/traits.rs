use crate::core::models::record::TaxonPair;
use crate::core::models::table::CodeTable;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading name pairs and writing coded tables.
///
/// Implementors handle format-specific tokenizing and serialization; the
/// path-based helpers take care of opening, buffering and replacing files.
pub trait TaxonFile {
    /// The error type for I/O and format failures.
    type Error: Error + From<io::Error>;

    /// Reads every (genus, species) pair from a buffered reader, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input does not hold whole pairs.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<TaxonPair>, Self::Error>;

    /// Writes a coded table, including its summary fields, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(table: &CodeTable, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads every pair from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TaxonPair>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a coded table to `path`, replacing any existing file.
    ///
    /// The table is first written to a temporary file in the destination
    /// directory and then renamed over `path`, so the destination is either
    /// left untouched or fully replaced. A replaced file keeps its
    /// permissions. A new file gets the mode a plain `File::create` would
    /// give it under the current umask.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written or
    /// moved into place.
    fn write_to_path<P: AsRef<Path>>(table: &CodeTable, path: P) -> Result<(), Self::Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let mut temp = new_temp_file(dir)?;
        if let Some(permissions) = existing {
            temp.as_file().set_permissions(permissions)?;
        }
        {
            let mut writer = BufWriter::new(&mut temp);
            Self::write_to(table, &mut writer)?;
            writer.flush()?;
        }
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The requested mode is masked by the umask, as with `File::create`.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<tempfile::NamedTempFile> {
    tempfile::NamedTempFile::new_in(dir)
}
