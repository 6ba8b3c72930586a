//! Tournament data models.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Tournament ID type
pub type TournamentId = u64;

/// Category used when a tournament is created without one
pub const DEFAULT_CATEGORY: &str = "Open";

/// Tournament status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentStatus {
    /// Announced, not started yet
    #[default]
    Upcoming,
    /// Rounds in progress
    Ongoing,
    /// Finished
    Completed,
}

impl TournamentStatus {
    pub const ALL: [TournamentStatus; 3] = [
        TournamentStatus::Upcoming,
        TournamentStatus::Ongoing,
        TournamentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Ongoing => "Ongoing",
            TournamentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tournament status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for TournamentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "ongoing" => Ok(TournamentStatus::Ongoing),
            "completed" => Ok(TournamentStatus::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Fields every stored tournament must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Name,
    Location,
    Dates,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Location => write!(f, "location"),
            RequiredField::Dates => write!(f, "dates"),
        }
    }
}

/// Whitespace-only input counts as missing.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collect the required fields that are blank, in declaration order.
pub fn missing_required(name: &str, location: &str, dates: &str) -> Vec<RequiredField> {
    [
        (RequiredField::Name, name),
        (RequiredField::Location, location),
        (RequiredField::Dates, dates),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(value))
    .map(|(field, _)| field)
    .collect()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A tournament entry as held by the content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Display name
    pub name: String,
    /// Venue or city
    pub location: String,
    /// Free-text schedule, e.g. "Feb 20-25, 2026"
    pub dates: String,
    /// Classification such as Open, U12, U18
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub status: TournamentStatus,
    /// Registration or results URL (unvalidated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

impl Tournament {
    /// Required fields this record is missing
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_required(&self.name, &self.location, &self.dates)
    }
}

/// Input for creating a tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTournament {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
}

impl NewTournament {
    /// Create input with the required fields and defaults for the rest
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        dates: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            dates: dates.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: TournamentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_region(mut self, country: impl Into<String>, continent: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.continent = Some(continent.into());
        self
    }

    /// Required fields this input is missing
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_required(&self.name, &self.location, &self.dates)
    }

    /// Convert into a stored record, applying defaults.
    ///
    /// Blank optional values are stored as absent and a blank category
    /// falls back to [`DEFAULT_CATEGORY`].
    pub(crate) fn into_tournament(self) -> Tournament {
        Tournament {
            name: self.name,
            location: self.location,
            dates: self.dates,
            category: non_blank(self.category).unwrap_or_else(default_category),
            status: self.status,
            link: non_blank(self.link),
            country: non_blank(self.country),
            continent: non_blank(self.continent),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

/// Partial update for a stored tournament.
///
/// `None` leaves a field untouched. For the optional text fields
/// (`link`, `country`, `continent`) an empty string clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<TournamentStatus>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
}

impl TournamentPatch {
    pub fn is_empty(&self) -> bool {
        *self == TournamentPatch::default()
    }

    /// Produce the merged record without touching `base`
    pub(crate) fn apply_to(&self, base: &Tournament) -> Tournament {
        let mut merged = base.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(location) = &self.location {
            merged.location = location.clone();
        }
        if let Some(dates) = &self.dates {
            merged.dates = dates.clone();
        }
        if let Some(category) = &self.category {
            merged.category = if is_blank(category) {
                default_category()
            } else {
                category.clone()
            };
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(link) = &self.link {
            merged.link = non_blank(Some(link.clone()));
        }
        if let Some(country) = &self.country {
            merged.country = non_blank(Some(country.clone()));
        }
        if let Some(continent) = &self.continent {
            merged.continent = non_blank(Some(continent.clone()));
        }
        merged
    }
}

/// A stored tournament together with its store-assigned identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: TournamentId,
    #[serde(flatten)]
    pub tournament: Tournament,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("ongoing".parse(), Ok(TournamentStatus::Ongoing));
        assert_eq!("Completed".parse(), Ok(TournamentStatus::Completed));
        assert!("postponed".parse::<TournamentStatus>().is_err());
    }

    #[test]
    fn test_missing_required_reports_in_order() {
        assert_eq!(
            missing_required("", "  ", "Feb 1"),
            vec![RequiredField::Name, RequiredField::Location]
        );
        assert!(missing_required("a", "b", "c").is_empty());
    }

    #[test]
    fn test_new_tournament_defaults() {
        let tournament = NewTournament::new("Masters", "Ipoh", "May 1-3")
            .with_link("")
            .into_tournament();

        assert_eq!(tournament.category, DEFAULT_CATEGORY);
        assert_eq!(tournament.status, TournamentStatus::Upcoming);
        assert_eq!(tournament.link, None);
        assert_eq!(tournament.country, None);
    }

    #[test]
    fn test_patch_clears_optional_and_keeps_rest() {
        let base = NewTournament::new("Masters", "Ipoh", "May 1-3")
            .with_link("https://chess-results.com/tnr1")
            .into_tournament();
        let patch = TournamentPatch {
            link: Some(String::new()),
            status: Some(TournamentStatus::Completed),
            ..Default::default()
        };

        let merged = patch.apply_to(&base);
        assert_eq!(merged.link, None);
        assert_eq!(merged.status, TournamentStatus::Completed);
        assert_eq!(merged.name, "Masters");
    }

    #[test]
    fn test_tournament_deserializes_with_defaults() {
        let json = r#"{"name":"Penang Open","location":"George Town","dates":"Jun 2026"}"#;
        let tournament: Tournament = serde_json::from_str(json).unwrap();
        assert_eq!(tournament.category, "Open");
        assert_eq!(tournament.status, TournamentStatus::Upcoming);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = TournamentRecord {
            id: 7,
            tournament: NewTournament::new("A", "B", "C").into_tournament(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "A");
        assert!(value.get("link").is_none());
    }
}
