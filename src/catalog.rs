//! Lookup from (year, month) to the products offered that month

use crate::data::{MonthlyCatalog, Product};
use std::collections::HashMap;
use std::fmt;

/// Composite key identifying one calendar month as written in the documents
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    pub year: i32,
    pub month: String,
}

impl PeriodKey {
    pub fn new(year: i32, month: impl Into<String>) -> Self {
        Self {
            year,
            month: month.into(),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Product catalogs indexed by period
///
/// When two catalogs share a period the one loaded last replaces the earlier.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    catalogs: HashMap<PeriodKey, Vec<Product>>,
}

impl CatalogIndex {
    /// Build the index, consuming catalogs in document order
    pub fn build(catalogs: Vec<MonthlyCatalog>) -> Self {
        let mut index = HashMap::with_capacity(catalogs.len());

        for catalog in catalogs {
            let key = PeriodKey::new(catalog.year, catalog.month);
            if index.insert(key.clone(), catalog.products).is_some() {
                log::debug!("Duplicate catalog for {}, keeping the later one", key);
            }
        }

        Self { catalogs: index }
    }

    /// Products offered in the given month, if a catalog exists
    pub fn get(&self, year: i32, month: &str) -> Option<&[Product]> {
        self.catalogs
            .get(&PeriodKey::new(year, month))
            .map(Vec::as_slice)
    }

    /// Iterate over every indexed period (unordered)
    pub fn periods(&self) -> impl Iterator<Item = (&PeriodKey, &[Product])> {
        self.catalogs.iter().map(|(key, products)| (key, products.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
