//! Load snapshot and catalog documents from JSON

use super::{MonthlySnapshot, MonthlyCatalog};
use crate::error::{DocumentKind, Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default snapshot document location
pub const DEFAULT_SNAPSHOT_FILE: &str = "interest_data.json";

/// Default catalog document location
pub const DEFAULT_CATALOG_FILE: &str = "products_data.json";

fn open(kind: DocumentKind, path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Load monthly snapshots from a JSON file, keeping document order
pub fn load_snapshots<P: AsRef<Path>>(path: P) -> Result<Vec<MonthlySnapshot>> {
    let path = path.as_ref();
    let snapshots = snapshots_from_reader(open(DocumentKind::Snapshots, path)?)?;
    log::info!("Loaded {} snapshots from {}", snapshots.len(), path.display());
    Ok(snapshots)
}

/// Load monthly catalogs from a JSON file, keeping document order
pub fn load_catalogs<P: AsRef<Path>>(path: P) -> Result<Vec<MonthlyCatalog>> {
    let path = path.as_ref();
    let catalogs = catalogs_from_reader(open(DocumentKind::Catalogs, path)?)?;
    log::info!("Loaded {} catalogs from {}", catalogs.len(), path.display());
    Ok(catalogs)
}

/// Parse snapshots from any reader (e.g., string buffer, stdin)
pub fn snapshots_from_reader<R: Read>(reader: R) -> Result<Vec<MonthlySnapshot>> {
    serde_json::from_reader(reader).map_err(|source| Error::Parse {
        kind: DocumentKind::Snapshots,
        source,
    })
}

/// Parse catalogs from any reader (e.g., string buffer, stdin)
pub fn catalogs_from_reader<R: Read>(reader: R) -> Result<Vec<MonthlyCatalog>> {
    serde_json::from_reader(reader).map_err(|source| Error::Parse {
        kind: DocumentKind::Catalogs,
        source,
    })
}
