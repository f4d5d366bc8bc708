//! Domain value objects: RecordType, NodeKind and the country
//! date-format lookup.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. This
//! file's only job is to define the types, their string representations, and
//! their parsers.
//!
//! # Adding a record type
//!
//! 1. Add the enum variant here
//! 2. Add the `code`, `arity` and `FromStr` arms here
//! 3. Add the dispatch arm in `builder.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── RecordType ───────────────────────────────────────────────────────────────

/// The kind of record a line carries, selected by its leading type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Header,
    Description,
    Schedule,
    UserNode,
    CustomerNode,
    LocationNode,
    ProductNode,
    Parameter,
    CustomerBusiness,
    LocationBusiness,
    ItemPrice,
}

impl RecordType {
    pub const ALL: [RecordType; 11] = [
        Self::Header,
        Self::Description,
        Self::Schedule,
        Self::UserNode,
        Self::CustomerNode,
        Self::LocationNode,
        Self::ProductNode,
        Self::Parameter,
        Self::CustomerBusiness,
        Self::LocationBusiness,
        Self::ItemPrice,
    ];

    /// The type code as it appears in the first field of a line.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Header => "A",
            Self::Description => "D",
            Self::Schedule => "S",
            Self::UserNode => "U",
            Self::CustomerNode => "C",
            Self::LocationNode => "L",
            Self::ProductNode => "P",
            Self::Parameter => "V",
            Self::CustomerBusiness => "CB",
            Self::LocationBusiness => "LB",
            Self::ItemPrice => "I",
        }
    }

    /// Number of payload fields (after the type code) the record carries.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Header => 5,
            Self::Description => 3,
            Self::Schedule => 11,
            Self::UserNode => 4,
            Self::CustomerNode | Self::LocationNode => 5,
            Self::ProductNode => 6,
            Self::Parameter => 3,
            Self::CustomerBusiness => 1,
            Self::LocationBusiness => 3,
            Self::ItemPrice => 16,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordType {
    type Err = ();

    /// Exact, case-sensitive match on the type code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::Header),
            "D" => Ok(Self::Description),
            "S" => Ok(Self::Schedule),
            "U" => Ok(Self::UserNode),
            "C" => Ok(Self::CustomerNode),
            "L" => Ok(Self::LocationNode),
            "P" => Ok(Self::ProductNode),
            "V" => Ok(Self::Parameter),
            "CB" => Ok(Self::CustomerBusiness),
            "LB" => Ok(Self::LocationBusiness),
            "I" => Ok(Self::ItemPrice),
            _ => Err(()),
        }
    }
}

// ── NodeKind ─────────────────────────────────────────────────────────────────

/// Hierarchy a scoping node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    User,
    Customer,
    Location,
    Product,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [Self::User, Self::Customer, Self::Location, Self::Product];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "U",
            Self::Customer => "C",
            Self::Location => "L",
            Self::Product => "P",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::User => 0,
            Self::Customer => 1,
            Self::Location => 2,
            Self::Product => 3,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Country date formats ─────────────────────────────────────────────────────

/// Input format of schedule dates.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Country used when no adjustment in a run names one.
pub const DEFAULT_COUNTRY: &str = "USA";

const EXPORT_FORMATS: &[(&str, &str)] = &[("USA", "%m/%d/%Y"), ("CAN", "%m/%d/%Y")];

/// Look up the export date format for a country code.
pub fn export_date_format(country: &str) -> Result<&'static str, DomainError> {
    EXPORT_FORMATS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, format)| *format)
        .ok_or_else(|| DomainError::UnsupportedCountry {
            country: country.to_string(),
        })
}
