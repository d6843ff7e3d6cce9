//! Catalogue construction.
//!
//! [`CatalogueBuilder`] collects countries in insertion order and enforces
//! the unique-code invariant when [`build`](CatalogueBuilder::build) is
//! called. The resulting [`Catalogue`] is immutable; there is no way to add
//! or remove entries after construction.
//!
//! # Example
//!
//! ```rust
//! use countrydb::{CatalogueBuilder, Country, Region};
//!
//! let mut builder = CatalogueBuilder::new();
//! builder.add_country("BG", "Bulgaria", &[Region::CentralEurope]);
//! builder.push(Country::new("DE", "Germany"));
//!
//! let catalogue = builder.build()?;
//! assert_eq!(catalogue.len(), 2);
//! # Ok::<(), countrydb::CatalogueError>(())
//! ```

use std::collections::HashMap;

use crate::catalogue::Catalogue;
use crate::country::{Country, Region};
use crate::error::{CatalogueError, Result};

/// Builder for assembling an immutable [`Catalogue`].
///
/// Entries keep their insertion order, which becomes the catalogue order
/// used by all "return all" and filter results.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    countries: Vec<Country>,
}

impl CatalogueBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a country record.
    pub fn push(&mut self, country: Country) -> &mut Self {
        self.countries.push(country);
        self
    }

    /// Append a country from its parts.
    pub fn add_country(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        regions: &[Region],
    ) -> &mut Self {
        self.push(Country::with_regions(code, name, regions.to_vec()))
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether no entries have been collected yet.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Build the catalogue, verifying that every code is unique.
    ///
    /// Returns [`CatalogueError::DuplicateCode`] naming the first repeated
    /// code. Duplicate detection is exact and case-sensitive, matching the
    /// lookup semantics of the catalogue itself.
    pub fn build(self) -> Result<Catalogue> {
        let mut index = HashMap::with_capacity(self.countries.len());
        for (position, country) in self.countries.iter().enumerate() {
            if index.insert(country.code.clone(), position).is_some() {
                return Err(CatalogueError::DuplicateCode {
                    code: country.code.clone(),
                });
            }
        }
        Ok(Catalogue::from_parts(self.countries, index))
    }
}
