//! Station records.

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// Display language for station and line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English names.
    #[default]
    En,
    /// Hindi names.
    Hi,
}

impl Language {
    /// Parse a language code such as `"en"` or `"hi"`.
    ///
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }
}

/// A station exit and the landmark it leads to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub name: String,
    pub landmark: String,
    /// Walking distance to the landmark, in metres.
    pub distance: f64,
}

/// A station in the network data.
///
/// Only `id` and `lines` matter to route planning. Everything else is
/// operational metadata passed through to the presentation layer
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(default)]
    pub name_hi: String,
    #[serde(default)]
    pub lines: Vec<LineId>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub is_interchange: bool,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub first_train: String,
    #[serde(default)]
    pub last_train: String,
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(default)]
    pub nearby_transport: Vec<String>,
}

impl Station {
    /// Create a station with the given id, name and line memberships.
    ///
    /// Metadata fields are left empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            id: StationId::new(id),
            name: name.into(),
            name_hi: String::new(),
            lines: lines.iter().map(|l| LineId::from(*l)).collect(),
            lat: 0.0,
            lng: 0.0,
            is_interchange: lines.len() > 1,
            facilities: Vec::new(),
            first_train: String::new(),
            last_train: String::new(),
            exits: Vec::new(),
            nearby_transport: Vec::new(),
        }
    }

    /// Returns the name to show for the given language.
    ///
    /// Falls back to the English name when no Hindi name is recorded.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Hi if !self.name_hi.is_empty() => &self.name_hi,
            _ => &self.name,
        }
    }

    /// Returns true if this station is served by the given line.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }
}
