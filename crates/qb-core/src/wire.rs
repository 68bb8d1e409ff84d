//! JSON dataset format.
//!
//! Field names are camelCase, matching the record shape in [`crate::model`].
//! `version` and `timestamp` are optional on input so a hand-written dataset
//! only needs the three arrays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError};
use crate::date::now_iso8601;
use crate::model::{Author, Category, Quote};

pub const CURRENT_VERSION: &str = "1.0";

#[derive(Serialize, Deserialize, Debug)]
pub struct DatasetExport {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

#[derive(Debug)]
pub enum WireError {
    Json(serde_json::Error),
    Catalog(CatalogError),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Json(e) => write!(f, "JSON error: {e}"),
            WireError::Catalog(e) => write!(f, "invalid dataset: {e}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Json(e) => Some(e),
            WireError::Catalog(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        WireError::Json(e)
    }
}

impl From<CatalogError> for WireError {
    fn from(e: CatalogError) -> Self {
        WireError::Catalog(e)
    }
}

impl DatasetExport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            timestamp: now_iso8601(),
            authors: catalog.authors().to_vec(),
            categories: catalog.categories().to_vec(),
            quotes: catalog.quotes().to_vec(),
        }
    }

    /// Validate and build a catalog from the decoded collections.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.authors, self.categories, self.quotes)
    }
}

/// Parse a JSON dataset and validate it into a [`Catalog`].
pub fn import_json(json: &str) -> Result<Catalog, WireError> {
    let wire: DatasetExport = serde_json::from_str(json)?;
    Ok(wire.into_catalog()?)
}

/// Serialize a catalog to the JSON dataset format.
pub fn export_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DatasetExport::from_catalog(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn test_export_then_import_preserves_records() {
        let cat = fixture::catalog().unwrap();
        let json = export_json(&cat).unwrap();
        let back = import_json(&json).unwrap();
        assert_eq!(back.authors(), cat.authors());
        assert_eq!(back.categories(), cat.categories());
        assert_eq!(back.quotes(), cat.quotes());
    }

    #[test]
    fn test_version_field() {
        let json = export_json(&fixture::catalog().unwrap()).unwrap();
        let wire: DatasetExport = serde_json::from_str(&json).unwrap();
        assert_eq!(wire.version, CURRENT_VERSION);
        assert!(json.contains("\"authorId\""));
        assert!(json.contains("\"birthDate\": \"1879-03-14\""));
    }

    #[test]
    fn test_minimal_hand_written_dataset() {
        let json = r#"{
            "authors": [{
                "id": "auth_twain",
                "name": "Mark Twain",
                "bio": "Writer",
                "birthDate": "1835-11-30",
                "deathDate": "1910-04-21",
                "profession": "Writer",
                "nationality": "American"
            }],
            "categories": [{ "id": "cat_humor", "name": "Humor", "description": "Funny" }],
            "quotes": [{
                "id": "q1",
                "text": "The secret of getting ahead is getting started.",
                "authorId": "auth_twain",
                "categoryId": "cat_humor"
            }]
        }"#;
        let cat = import_json(json).unwrap();
        assert_eq!(cat.count_by_author("auth_twain"), 1);
        assert!(!cat.quotes()[0].is_featured);
        assert_eq!(cat.find_author("auth_twain").unwrap().death_date.unwrap().year, 1910);
    }

    #[test]
    fn test_import_rejects_dangling_reference() {
        let json = r#"{
            "authors": [],
            "categories": [],
            "quotes": [{ "id": "q1", "text": "x", "authorId": "a", "categoryId": "c" }]
        }"#;
        let err = import_json(json).unwrap_err();
        assert!(matches!(err, WireError::Catalog(CatalogError::UnknownAuthor { .. })));
    }

    #[test]
    fn test_import_rejects_bad_date() {
        let json = r#"{
            "authors": [{
                "id": "a", "name": "A", "bio": "", "birthDate": "1900-02-30",
                "profession": "", "nationality": ""
            }]
        }"#;
        assert!(matches!(import_json(json), Err(WireError::Json(_))));
    }
}
