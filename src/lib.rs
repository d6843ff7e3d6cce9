//! Countrydb - Immutable Country Catalogue
//!
//! Countrydb is a small reference-data library for querying a fixed set of
//! countries: filter by code list, filter by name prefix, fetch a single
//! country by code, validate a set of codes, and list the members of static
//! regional groupings (Central Europe, French Overseas).
//!
//! # Quick Start
//!
//! ```rust
//! use countrydb::{Catalogue, Region};
//!
//! // Load the bundled ISO 3166-1 alpha-2 dataset
//! let catalogue = Catalogue::bundled()?;
//!
//! // Single lookup by code
//! let bulgaria = catalogue.country_by_code(Some("BG")).unwrap();
//! assert_eq!(bulgaria.name, "Bulgaria");
//!
//! // Filter by a list of codes (catalogue order, unknown codes dropped)
//! let some = catalogue.countries_by_codes(&["BG", "DE", "??"]);
//! assert_eq!(some.len(), 2);
//!
//! // Case-sensitive name prefix filter
//! let g = catalogue.countries_by_name_prefix(Some("Ge"));
//! assert!(g.iter().any(|c| c.code == "GE"));
//!
//! // Validate a set of codes
//! assert!(catalogue.all_codes_supported(&["BG", "DE"]));
//! assert!(!catalogue.all_codes_supported(&["BG", "XX"]));
//!
//! // Static regional groupings
//! let overseas = catalogue.countries_in_region(Region::FrenchOverseas);
//! assert!(!overseas.is_empty());
//! # Ok::<(), countrydb::CatalogueError>(())
//! ```
//!
//! # Building a custom catalogue
//!
//! The bundled dataset is just one source. Any ordered set of countries can
//! be assembled with [`CatalogueBuilder`], or parsed from JSON with
//! [`Catalogue::from_json`] / [`Catalogue::from_path`]:
//!
//! ```rust
//! use countrydb::{CatalogueBuilder, Region};
//!
//! let mut builder = CatalogueBuilder::new();
//! builder.add_country("BG", "Bulgaria", &[Region::CentralEurope]);
//! builder.add_country("DE", "Germany", &[]);
//! let catalogue = builder.build()?;
//!
//! assert_eq!(catalogue.len(), 2);
//! # Ok::<(), countrydb::CatalogueError>(())
//! ```
//!
//! # Design
//!
//! The catalogue is built once and never mutated afterwards. Every query is
//! a pure read over the immutable structure, so a `Catalogue` (typically
//! behind an `Arc`) can be shared across threads with no locking. Iteration
//! order is always the insertion order of the load step.
//!
//! Unknown codes in filter inputs are dropped silently rather than reported
//! as errors; [`Catalogue::all_codes_supported`] is the validation entry
//! point. The only fallible step is construction, which rejects duplicate
//! codes and malformed datasets.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules (documented API)
/// Catalogue construction with invariant enforcement
pub mod builder;
/// Immutable catalogue and its query operations
pub mod catalogue;
/// Country record and region groupings
pub mod country;
/// Error types for catalogue operations
pub mod error;

// Dataset loading (inherent impls on Catalogue)
mod loader;

// Flat re-exports of the public surface
pub use builder::CatalogueBuilder;
pub use catalogue::Catalogue;
pub use country::{Country, Region};
pub use error::{CatalogueError, Result};
