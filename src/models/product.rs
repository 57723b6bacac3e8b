use serde::{Deserialize, Serialize};

use crate::models::lenient::null_as_default;

/// The subset of a store product this storefront reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProduct {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URL-safe product handle, used for `/products/{handle}`.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl StoreProduct {
    /// Case-insensitive substring match against title, description and handle.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        let field_matches =
            |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(needle));

        field_matches(Some(&self.title))
            || field_matches(self.description.as_deref())
            || field_matches(self.handle.as_deref())
    }

    /// Storefront path of the product page, without the country prefix.
    /// Falls back to the id for products without a handle.
    pub fn path(&self) -> String {
        let key = self
            .handle
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.id);
        format!("/products/{key}")
    }
}

/// A commerce region and the countries it serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<RegionCountry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCountry {
    pub iso_2: String,
}

impl Region {
    pub fn serves(&self, country_code: &str) -> bool {
        self.countries
            .iter()
            .any(|c| c.iso_2.eq_ignore_ascii_case(country_code))
    }
}
