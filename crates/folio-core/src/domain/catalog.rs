//! Reference entities: persons, categories, venues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A person who may appear as an author or contributor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

/// Subject category for publications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueKind {
    Journal,
    Conference,
    Workshop,
    Other,
}

impl VenueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueKind::Journal => "journal",
            VenueKind::Conference => "conference",
            VenueKind::Workshop => "workshop",
            VenueKind::Other => "other",
        }
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(VenueKind::Journal),
            "conference" => Ok(VenueKind::Conference),
            "workshop" => Ok(VenueKind::Workshop),
            "other" => Ok(VenueKind::Other),
            unknown => Err(format!("unknown venue kind: {unknown}")),
        }
    }
}

/// Publication venue (journal, conference, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub kind: VenueKind,
    pub issn: Option<String>,
}
