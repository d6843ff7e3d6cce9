//! Dataset loading.
//!
//! A catalogue source is a JSON array of country records:
//!
//! ```json
//! [
//!   { "code": "BG", "name": "Bulgaria", "regions": ["central-europe"] },
//!   { "code": "DE", "name": "Germany" }
//! ]
//! ```
//!
//! The `regions` field is optional and defaults to empty. Array order
//! becomes the catalogue order. Loaded data goes through the same builder
//! as hand-assembled catalogues, so the unique-code invariant is enforced
//! on every source.

use std::fs;
use std::path::Path;

use crate::builder::CatalogueBuilder;
use crate::catalogue::Catalogue;
use crate::country::Country;
use crate::error::Result;

/// The dataset shipped with the crate: the ISO 3166-1 alpha-2 country list
/// in code order, with Central Europe and French Overseas region tags.
const BUNDLED_DATASET: &str = include_str!("../data/countries.json");

impl Catalogue {
    /// Parse a catalogue from a JSON array of country records.
    ///
    /// Fails on malformed JSON, records missing `code` or `name`, unknown
    /// region tags, or duplicate codes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countrydb::Catalogue;
    ///
    /// let catalogue = Catalogue::from_json(
    ///     r#"[{"code":"BG","name":"Bulgaria"},{"code":"DE","name":"Germany"}]"#,
    /// )?;
    /// assert_eq!(catalogue.len(), 2);
    /// # Ok::<(), countrydb::CatalogueError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Catalogue> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        let mut builder = CatalogueBuilder::new();
        for country in countries {
            builder.push(country);
        }
        builder.build()
    }

    /// Load a catalogue from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalogue> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the dataset bundled with the crate.
    ///
    /// Only fails if the bundled data is corrupt, which would be a packaging
    /// defect; callers that treat the bundled set as authoritative typically
    /// propagate this as a fatal startup error.
    pub fn bundled() -> Result<Catalogue> {
        Self::from_json(BUNDLED_DATASET)
    }
}
