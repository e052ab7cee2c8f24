//! CSV source: reads a named file from the configured folder into typed
//! row records. An absent file yields an empty sequence, not an error; a
//! malformed row is logged and skipped without failing the file.
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::errors::SourceError;

/// Folder of CSV files, one per entity kind.
#[derive(Debug, Clone)]
pub struct CsvSource {
    folder: PathBuf,
}

impl CsvSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        CsvSource {
            folder: folder.into(),
        }
    }

    /// Loads `filename` into a sequence of typed records.
    ///
    /// # Returns
    ///
    /// The parsed rows; an empty Vec when the file does not exist. An
    /// unreadable file or malformed header is a `SourceError`, which fails
    /// the corresponding step (not the run).
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>, SourceError> {
        let path = self.folder.join(filename);
        if !path.exists() {
            info!("CSV file not found: {}", path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)?;

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("failed to parse {} record {}: {}", filename, idx + 1, e);
                }
            }
        }
        info!("loaded {} records from {}", records.len(), filename);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeder_shared::types::{BrandRecord, CategoryRecord};
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn missing_file_yields_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvSource::new(dir.path());
        let rows: Vec<BrandRecord> = source.load("brands.csv").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_deserialize_with_camel_case_headers() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "brands.csv",
            "id,name,description,website,imageUrl\n\
             b-1,Acme,Tools,https://acme.test,https://acme.test/logo.png\n",
        );
        let source = CsvSource::new(dir.path());
        let rows: Vec<BrandRecord> = source.load("brands.csv").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Acme");
        assert_eq!(rows[0].image_url, "https://acme.test/logo.png");
    }

    #[test]
    fn malformed_row_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "categories.csv",
            "id,name,description,imageUrl,parent\n\
             c-1,Electronics,Devices,img,\n\
             only-two-fields,oops\n\
             c-2,Phones,Handsets,img,Electronics\n",
        );
        let source = CsvSource::new(dir.path());
        let rows: Vec<CategoryRecord> = source.load("categories.csv").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_root());
        assert_eq!(rows[1].parent.as_deref(), Some("Electronics"));
    }

    #[test]
    fn empty_parent_cell_is_a_root() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "categories.csv",
            "id,name,description,imageUrl,parent\n\
             c-1,Electronics,Devices,img,\n",
        );
        let source = CsvSource::new(dir.path());
        let rows: Vec<CategoryRecord> = source.load("categories.csv").unwrap();
        assert!(rows[0].is_root());
    }
}
