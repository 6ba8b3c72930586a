//! Locally collected input for a new tournament.

use crate::content::{
    DEFAULT_CATEGORY, NewTournament, RequiredField, TournamentStatus, models::missing_required,
};
use serde::{Deserialize, Serialize};

/// Default region pre-filled on the form
pub const DEFAULT_COUNTRY: &str = "Malaysia";
pub const DEFAULT_CONTINENT: &str = "Asia";

/// Editable text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Location,
    Dates,
    Category,
    Link,
    Country,
    Continent,
}

/// Create-tournament form values.
///
/// Every field is plain text as typed; conversion to [`NewTournament`]
/// happens on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentForm {
    pub name: String,
    pub location: String,
    pub dates: String,
    pub category: String,
    pub status: TournamentStatus,
    pub link: String,
    pub country: String,
    pub continent: String,
}

impl Default for TournamentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            dates: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            status: TournamentStatus::Upcoming,
            link: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            continent: DEFAULT_CONTINENT.to_string(),
        }
    }
}

impl TournamentForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Location => self.location = value,
            FormField::Dates => self.dates = value,
            FormField::Category => self.category = value,
            FormField::Link => self.link = value,
            FormField::Country => self.country = value,
            FormField::Continent => self.continent = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Location => &self.location,
            FormField::Dates => &self.dates,
            FormField::Category => &self.category,
            FormField::Link => &self.link,
            FormField::Country => &self.country,
            FormField::Continent => &self.continent,
        }
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_required(&self.name, &self.location, &self.dates)
    }

    /// Store input built from the current values
    pub fn to_new_tournament(&self) -> NewTournament {
        NewTournament {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            dates: self.dates.trim().to_string(),
            category: Some(self.category.trim().to_string()),
            status: self.status,
            link: Some(self.link.trim().to_string()),
            country: Some(self.country.trim().to_string()),
            continent: Some(self.continent.trim().to_string()),
        }
    }
}
