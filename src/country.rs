//! Country record and static region groupings.

use serde::Deserialize;

/// Static regional grouping a country can belong to.
///
/// Membership is an attribute of the dataset, not something computed at
/// query time: a country carries its region tags from the load step onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// Central Europe grouping
    CentralEurope,
    /// French overseas departments and collectivities
    FrenchOverseas,
}

/// One catalogue entry.
///
/// `code` is the primary lookup key and is unique within a catalogue
/// (enforced at construction). `name` is a display string with no
/// uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    /// Short case-sensitive identifier, e.g. an ISO 3166-1 alpha-2 code
    pub code: String,
    /// Human-readable display name
    pub name: String,
    /// Regional groupings this country belongs to (often empty)
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Country {
    /// Create a country with no region memberships.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            regions: Vec::new(),
        }
    }

    /// Create a country with the given region memberships.
    pub fn with_regions(
        code: impl Into<String>,
        name: impl Into<String>,
        regions: impl Into<Vec<Region>>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            regions: regions.into(),
        }
    }

    /// Whether this country is flagged as a member of `region`.
    pub fn in_region(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}
