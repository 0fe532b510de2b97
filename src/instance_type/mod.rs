//! Validated EC2 instance types.
//!
//! An [`InstanceType`] can only be obtained from the catalog, either by
//! family and size tier or by validating a raw identifier, so every value in
//! circulation is a type the provider knows about.

mod family;
mod known;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub use family::{Cpu, Family};

/// Errors raised while constructing an [`InstanceType`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CatalogError {
    /// Raised when a size tier lies outside the family's table.
    #[error("size {size} is not valid for {family} instances: expected {min} to {max}")]
    InvalidSize {
        /// Family the tier was requested for.
        family: Family,
        /// Requested tier.
        size: u32,
        /// Smallest supported tier.
        min: u32,
        /// Largest supported tier.
        max: u32,
    },
    /// Raised when a raw identifier is not in the catalog.
    #[error("unknown instance type '{value}'")]
    UnknownInstanceType {
        /// Identifier passed by the caller.
        value: String,
    },
}

/// A compute instance type known to the provider, such as `m5.large`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InstanceType(&'static str);

impl InstanceType {
    /// Resolves the type at `size` within `family`, where 1 is the smallest
    /// tier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSize`] when `size` is outside
    /// `1..=family.max_tier()`.
    pub fn from_family_size(family: Family, size: u32) -> Result<Self, CatalogError> {
        family
            .identifier(size)
            .map(Self)
            .ok_or_else(|| CatalogError::InvalidSize {
                family,
                size,
                min: 1,
                max: family.max_tier(),
            })
    }

    /// Validates a raw identifier against the catalog. Matching is exact and
    /// case sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownInstanceType`] when `raw` is not a
    /// known identifier.
    pub fn from_string(raw: &str) -> Result<Self, CatalogError> {
        known::lookup(raw)
            .map(Self)
            .ok_or_else(|| CatalogError::UnknownInstanceType {
                value: raw.to_owned(),
            })
    }

    /// Previous generation micro instance (`t1.micro`).
    #[must_use]
    pub const fn t1_micro() -> Self {
        Self("t1.micro")
    }

    /// Canonical identifier, byte-for-byte as the provider expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Iterates over every identifier in the catalog.
    pub fn all() -> impl Iterator<Item = Self> {
        known::KNOWN_IDENTIFIERS.iter().copied().map(Self)
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for InstanceType {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl FromStr for InstanceType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for InstanceType {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl From<InstanceType> for String {
    fn from(value: InstanceType) -> Self {
        value.0.to_owned()
    }
}

impl Serialize for InstanceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for InstanceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_string(&raw).map_err(serde::de::Error::custom)
    }
}
