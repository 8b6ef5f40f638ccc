use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::contact::{ZipCode, ZipCodeError};
use super::intake::{ZipLocation, ZipLookup, ZipLookupError};

#[derive(Debug)]
pub enum ZipDirectoryError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidZip { line: u64, source: ZipCodeError },
}

impl std::fmt::Display for ZipDirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZipDirectoryError::Io(err) => write!(f, "failed to read ZIP directory: {}", err),
            ZipDirectoryError::Csv(err) => write!(f, "invalid ZIP directory CSV data: {}", err),
            ZipDirectoryError::InvalidZip { line, source } => {
                write!(f, "ZIP directory line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for ZipDirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZipDirectoryError::Io(err) => Some(err),
            ZipDirectoryError::Csv(err) => Some(err),
            ZipDirectoryError::InvalidZip { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ZipDirectoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ZipDirectoryError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct ZipRow {
    zip: String,
    city: String,
    state: String,
}

/// ZIP lookup backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticZipDirectory {
    entries: BTreeMap<ZipCode, ZipLocation>,
}

/// Service-area ZIP codes bundled with the binary.
const SERVICE_AREA: &[(&str, &str, &str)] = &[
    ("50309", "Des Moines", "IA"),
    ("50310", "Des Moines", "IA"),
    ("50312", "Des Moines", "IA"),
    ("50265", "West Des Moines", "IA"),
    ("50266", "West Des Moines", "IA"),
    ("50021", "Ankeny", "IA"),
    ("50023", "Ankeny", "IA"),
    ("50322", "Urbandale", "IA"),
    ("50131", "Johnston", "IA"),
    ("50263", "Waukee", "IA"),
];

impl StaticZipDirectory {
    pub fn builtin() -> Self {
        let mut directory = Self::default();
        for (zip, city, state) in SERVICE_AREA {
            if let Ok(zip) = ZipCode::parse(zip) {
                directory.insert(zip, city, state);
            }
        }
        directory
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ZipDirectoryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load `zip,city,state` rows. Later rows replace earlier ones for the same ZIP.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ZipDirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut directory = Self::default();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: ZipRow = record.deserialize(Some(&headers))?;
            let zip = ZipCode::parse(&row.zip)
                .map_err(|source| ZipDirectoryError::InvalidZip { line, source })?;
            directory.insert(zip, &row.city, &row.state);
        }

        Ok(directory)
    }

    pub fn insert(&mut self, zip: ZipCode, city: &str, state: &str) {
        let location = ZipLocation {
            zip: zip.clone(),
            city: city.to_string(),
            state: state.to_ascii_uppercase(),
        };
        self.entries.insert(zip, location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ZipLookup for StaticZipDirectory {
    fn resolve(&self, zip: &ZipCode) -> Result<Option<ZipLocation>, ZipLookupError> {
        Ok(self.entries.get(zip).cloned())
    }
}
