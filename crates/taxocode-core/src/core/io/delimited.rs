use crate::core::io::traits::TaxonFile;
use crate::core::models::record::TaxonPair;
use crate::core::models::table::CodeTable;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Label placed in the fourth field of the first output line.
pub const SUMMARY_LABEL: &str = "Unique names generated:";

#[derive(Debug, Error)]
pub enum TaxonFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Illegal entry. Detected unequal number of genus and species names ({tokens} fields read)."
    )]
    InputFormat { tokens: usize },
    #[error("Malformed input on line {line}: {message}")]
    Malformed { line: u64, message: String },
}

impl From<csv::Error> for TaxonFileError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io(source),
            _ => Self::Malformed { line, message },
        }
    }
}

/// Comma-delimited name lists.
///
/// Input is treated as one flat stream of fields separated by commas or any
/// newline style (`\r`, `\n`, `\r\n`); fields are consumed two at a time as
/// genus and species. Blank lines carry no fields. Quotes have no special
/// meaning in either direction.
pub struct DelimitedTaxonFile;

impl TaxonFile for DelimitedTaxonFile {
    type Error = TaxonFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<TaxonPair>, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut tokens: Vec<String> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            tokens.extend(record.iter().map(str::to_owned));
        }

        if tokens.len() % 2 != 0 {
            return Err(TaxonFileError::InputFormat {
                tokens: tokens.len(),
            });
        }

        let mut pairs = Vec::with_capacity(tokens.len() / 2);
        let mut fields = tokens.into_iter();
        while let (Some(genus), Some(species)) = (fields.next(), fields.next()) {
            pairs.push(TaxonPair { genus, species });
        }
        Ok(pairs)
    }

    fn write_to(table: &CodeTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        let stat = table.summary().to_string();
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        for (i, record) in table.records().iter().enumerate() {
            let code = record.code.to_string();
            let mut fields = vec![
                record.pair.genus.as_str(),
                record.pair.species.as_str(),
                code.as_str(),
            ];
            match i {
                0 => fields.push(SUMMARY_LABEL),
                1 => fields.push(stat.as_str()),
                _ => {}
            }
            csv_writer.write_record(&fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::TaxonCode;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn read(input: &str) -> Result<Vec<TaxonPair>, TaxonFileError> {
        DelimitedTaxonFile::read_from(&mut Cursor::new(input.as_bytes()))
    }

    fn write(table: &CodeTable) -> String {
        let mut buf = Vec::new();
        DelimitedTaxonFile::write_to(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn read_accepts_every_newline_style() {
        let pairs = read("Panthera,leo\r\nPanthera,tigris\rFelis,catus\nCanis,lupus").unwrap();
        assert_eq!(
            pairs,
            vec![
                TaxonPair::new("Panthera", "leo"),
                TaxonPair::new("Panthera", "tigris"),
                TaxonPair::new("Felis", "catus"),
                TaxonPair::new("Canis", "lupus"),
            ]
        );
    }

    #[test]
    fn read_pairs_fields_across_line_boundaries() {
        let pairs = read("Panthera,leo,Panthera\ntigris\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                TaxonPair::new("Panthera", "leo"),
                TaxonPair::new("Panthera", "tigris"),
            ]
        );
    }

    #[test]
    fn read_skips_blank_lines_and_trailing_newline() {
        let pairs = read("\nPanthera,leo\n\n\nFelis,catus\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], TaxonPair::new("Felis", "catus"));
    }

    #[test]
    fn read_keeps_fields_verbatim() {
        let pairs = read("\"Panthera\", leo\n").unwrap();
        assert_eq!(pairs[0].genus, "\"Panthera\"");
        assert_eq!(pairs[0].species, " leo");
    }

    #[test]
    fn read_empty_input_yields_no_pairs() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn read_rejects_odd_field_count() {
        let err = read("Panthera,leo\nFelis\n").unwrap_err();
        assert!(matches!(err, TaxonFileError::InputFormat { tokens: 3 }));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let bytes: &[u8] = b"Panthera,le\xff\n";
        let err = DelimitedTaxonFile::read_from(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, TaxonFileError::Malformed { .. }));
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let err = DelimitedTaxonFile::read_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, TaxonFileError::Io(_)));
    }

    #[test]
    fn write_appends_summary_to_first_two_lines_only() {
        let table = CodeTable::from_parts(
            vec![
                TaxonPair::new("Panthera", "leo"),
                TaxonPair::new("Panthera", "leo"),
                TaxonPair::new("Felis", "catus"),
            ],
            vec![
                TaxonCode::unique("PANLEO"),
                TaxonCode::non_unique("PANLEO"),
                TaxonCode::unique("FELCAT"),
            ],
        );
        assert_eq!(
            write(&table),
            "Panthera,leo,PANLEO,Unique names generated:\n\
             Panthera,leo,PANLEO***,2 of 3\n\
             Felis,catus,FELCAT\n"
        );
    }

    #[test]
    fn write_single_record_carries_only_the_label() {
        let table = CodeTable::from_parts(
            vec![TaxonPair::new("Felis", "catus")],
            vec![TaxonCode::unique("FELCAT")],
        );
        assert_eq!(write(&table), "Felis,catus,FELCAT,Unique names generated:\n");
    }

    #[test]
    fn write_empty_table_produces_empty_output() {
        assert_eq!(write(&CodeTable::default()), "");
    }

    #[test]
    fn write_to_path_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that are longer than the new ones\n").unwrap();

        let table = CodeTable::from_parts(
            vec![TaxonPair::new("Canis", "lupus")],
            vec![TaxonCode::unique("CANLUP")],
        );
        DelimitedTaxonFile::write_to_path(&table, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Canis,lupus,CANLUP,Unique names generated:\n");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_to_path_keeps_permissions_of_replaced_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let table = CodeTable::from_parts(
            vec![TaxonPair::new("Canis", "lupus")],
            vec![TaxonCode::unique("CANLUP")],
        );

        for mode in [0o644, 0o640] {
            let path = dir.path().join("GenusSpecies.csv");
            fs::write(&path, "Canis,lupus\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();

            DelimitedTaxonFile::write_to_path(&table, &path).unwrap();

            let after = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn write_to_path_creates_new_file_like_file_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let reference = dir.path().join("reference.csv");
        fs::File::create(&reference).unwrap();
        let path = dir.path().join("out.csv");

        DelimitedTaxonFile::write_to_path(&CodeTable::default(), &path).unwrap();

        let mode_of = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode_of(path.as_path()), mode_of(reference.as_path()));
    }

    #[test]
    fn write_to_path_in_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = DelimitedTaxonFile::write_to_path(&CodeTable::default(), &path).unwrap_err();
        assert!(matches!(err, TaxonFileError::Io(_)));
        assert!(!path.exists());
    }
}
