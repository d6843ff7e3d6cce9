//! Immutable catalogue and its query operations.
//!
//! [`Catalogue`] holds an ordered set of [`Country`] records loaded once at
//! construction. Every operation is a pure read: filters return borrows in
//! catalogue order, unknown filter values are dropped silently, and an
//! absent filter means "no filter". Nothing here ever mutates the dataset.

use std::collections::{HashMap, HashSet};
use std::slice;

use crate::country::{Country, Region};

/// Immutable, ordered collection of countries with query operations.
///
/// Built via [`CatalogueBuilder`](crate::CatalogueBuilder) or one of the
/// loading constructors ([`from_json`](Catalogue::from_json),
/// [`from_path`](Catalogue::from_path), [`bundled`](Catalogue::bundled)).
/// Construction is the only fallible step; every query is total.
///
/// A `Catalogue` owns its records and hands out `&Country` borrows only.
/// It has no interior mutability, so it is `Send + Sync` and can be shared
/// across threads behind an `Arc` with no locking.
///
/// # Examples
///
/// ```rust
/// use countrydb::Catalogue;
///
/// let catalogue = Catalogue::bundled()?;
///
/// let france = catalogue.country_by_code(Some("FR")).unwrap();
/// assert_eq!(france.name, "France");
/// # Ok::<(), countrydb::CatalogueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalogue {
    /// Records in load order; this order is preserved in all results
    countries: Vec<Country>,
    /// code -> position in `countries`, for O(1) single-code lookups
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// Internal constructor used by the builder.
    ///
    /// `index` must map every code in `countries` to its position; the
    /// builder guarantees this while rejecting duplicates.
    pub(crate) fn from_parts(countries: Vec<Country>, index: HashMap<String, usize>) -> Self {
        debug_assert_eq!(countries.len(), index.len());
        Self { countries, index }
    }

    /// Number of countries in the catalogue.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalogue holds no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterate over all countries in catalogue order.
    pub fn iter(&self) -> slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// All countries in catalogue order.
    pub fn all(&self) -> Vec<&Country> {
        self.countries.iter().collect()
    }

    /// Countries whose code appears in `codes`, in catalogue order.
    ///
    /// An empty filter means "no filter" and returns the whole catalogue.
    /// Codes not present in the catalogue are dropped silently, and
    /// duplicate codes in the input do not produce duplicate results. The
    /// result order is the catalogue order, not the order of the input.
    ///
    /// This is a best-effort filter, not a validation API; use
    /// [`all_codes_supported`](Catalogue::all_codes_supported) to check a
    /// code set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countrydb::Catalogue;
    ///
    /// let catalogue = Catalogue::bundled()?;
    ///
    /// // Catalogue order, not input order
    /// let found = catalogue.countries_by_codes(&["DE", "BG"]);
    /// let codes: Vec<_> = found.iter().map(|c| c.code.as_str()).collect();
    /// assert_eq!(codes, ["BG", "DE"]);
    ///
    /// // Empty filter returns everything
    /// let no_codes: [&str; 0] = [];
    /// assert_eq!(catalogue.countries_by_codes(&no_codes).len(), catalogue.len());
    /// # Ok::<(), countrydb::CatalogueError>(())
    /// ```
    pub fn countries_by_codes<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&Country> {
        if codes.is_empty() {
            return self.all();
        }
        let wanted: HashSet<&str> = codes.iter().map(AsRef::as_ref).collect();
        self.countries
            .iter()
            .filter(|country| wanted.contains(country.code.as_str()))
            .collect()
    }

    /// Countries whose name starts with `prefix`, in catalogue order.
    ///
    /// `None` and `Some("")` both mean "no filter" and return the whole
    /// catalogue. Matching is exact and case-sensitive; a prefix that
    /// matches nothing yields an empty result, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countrydb::Catalogue;
    ///
    /// let catalogue = Catalogue::bundled()?;
    ///
    /// let bu = catalogue.countries_by_name_prefix(Some("Bulg"));
    /// assert_eq!(bu.len(), 1);
    /// assert_eq!(bu[0].name, "Bulgaria");
    ///
    /// // Case-sensitive: no match for a lowercase prefix
    /// assert!(catalogue.countries_by_name_prefix(Some("bulg")).is_empty());
    ///
    /// // Absent filter returns everything
    /// assert_eq!(catalogue.countries_by_name_prefix(None).len(), catalogue.len());
    /// # Ok::<(), countrydb::CatalogueError>(())
    /// ```
    pub fn countries_by_name_prefix(&self, prefix: Option<&str>) -> Vec<&Country> {
        match prefix {
            None | Some("") => self.all(),
            Some(prefix) => self
                .countries
                .iter()
                .filter(|country| country.name.starts_with(prefix))
                .collect(),
        }
    }

    /// Look up the single country with the given code.
    ///
    /// Returns `None` when `code` is absent or does not match any entry.
    /// Codes are unique in the catalogue, so at most one entry can match.
    pub fn country_by_code(&self, code: Option<&str>) -> Option<&Country> {
        let code = code?;
        self.index.get(code).map(|&position| &self.countries[position])
    }

    /// Whether every code in `codes` is present in the catalogue.
    ///
    /// Vacuously true for an empty input. Stops at the first unknown code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countrydb::Catalogue;
    ///
    /// let catalogue = Catalogue::bundled()?;
    /// assert!(catalogue.all_codes_supported(&["BG", "DE"]));
    /// assert!(!catalogue.all_codes_supported(&["BG", "XX", "DE"]));
    /// # Ok::<(), countrydb::CatalogueError>(())
    /// ```
    pub fn all_codes_supported<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        codes
            .iter()
            .all(|code| self.index.contains_key(code.as_ref()))
    }

    /// Countries flagged as members of `region`, in catalogue order.
    ///
    /// Membership is a static attribute carried by each country from the
    /// load step; nothing is computed here. An empty result is valid.
    pub fn countries_in_region(&self, region: Region) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|country| country.in_region(region))
            .collect()
    }

    /// Members of the Central Europe grouping, in catalogue order.
    pub fn central_europe(&self) -> Vec<&Country> {
        self.countries_in_region(Region::CentralEurope)
    }

    /// Members of the French Overseas grouping, in catalogue order.
    pub fn french_overseas(&self) -> Vec<&Country> {
        self.countries_in_region(Region::FrenchOverseas)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Country;
    type IntoIter = slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
