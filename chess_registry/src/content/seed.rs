//! Initial data handed to the content store at startup.
//!
//! The seed carries the tournament list plus the static site content
//! (learning tracks, resources, contact details). A built-in seed is used
//! unless a JSON file is supplied.

use super::{
    errors::ContentError,
    models::{Tournament, TournamentStatus},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed tournament #{index} is invalid: {source}")]
    InvalidTournament {
        index: usize,
        #[source]
        source: ContentError,
    },
}

/// A structured learning path shown on the Learn page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTrack {
    pub title: String,
    /// Beginner, Intermediate, Advanced
    pub level: String,
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// An external resource listed on the Resources page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Book, Website, Video, Tool
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// Static, read-only site content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub tagline: String,
    #[serde(default)]
    pub learning: Vec<LearningTrack>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    pub contact: ContactInfo,
}

impl Default for SiteContent {
    fn default() -> Self {
        SeedData::builtin().site
    }
}

/// Complete seed: tournaments plus static site content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub site: SiteContent,
}

impl SeedData {
    /// Parse a JSON seed and check every tournament
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Read a JSON seed from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every tournament must carry the required fields
    pub fn validate(&self) -> Result<(), SeedError> {
        for (index, tournament) in self.tournaments.iter().enumerate() {
            let missing = tournament.missing_fields();
            if !missing.is_empty() {
                return Err(SeedError::InvalidTournament {
                    index,
                    source: ContentError::Validation { missing },
                });
            }
        }
        Ok(())
    }

    /// Seed compiled into the binary
    pub fn builtin() -> Self {
        Self {
            tournaments: vec![
                tournament(
                    "Malaysia Chess Festival 2026",
                    "Kuala Lumpur",
                    "Aug 22-30, 2026",
                    "Open",
                    TournamentStatus::Upcoming,
                    Some("https://chess-results.com"),
                    "Malaysia",
                    "Asia",
                ),
                tournament(
                    "Penang Heritage Open",
                    "George Town",
                    "Jun 12-14, 2026",
                    "Open",
                    TournamentStatus::Upcoming,
                    None,
                    "Malaysia",
                    "Asia",
                ),
                tournament(
                    "ASEAN Age-Group Championships",
                    "Ho Chi Minh City",
                    "Oct 10-18, 2026",
                    "U18",
                    TournamentStatus::Ongoing,
                    None,
                    "Vietnam",
                    "Asia",
                ),
                tournament(
                    "Selangor Junior Rapid",
                    "Shah Alam",
                    "Mar 7, 2026",
                    "U12",
                    TournamentStatus::Completed,
                    None,
                    "Malaysia",
                    "Asia",
                ),
                tournament(
                    "Singapore International Open",
                    "Singapore",
                    "Dec 1-7, 2025",
                    "Open",
                    TournamentStatus::Completed,
                    Some("https://chess-results.com"),
                    "Singapore",
                    "Asia",
                ),
            ],
            site: SiteContent {
                tagline: "Where Malaysian chess competes".to_string(),
                learning: vec![
                    LearningTrack {
                        title: "Foundations".to_string(),
                        level: "Beginner".to_string(),
                        summary: "Piece movement, checkmate patterns and basic opening principles."
                            .to_string(),
                        topics: vec![
                            "Rules and notation".to_string(),
                            "Mating patterns".to_string(),
                            "Opening principles".to_string(),
                        ],
                    },
                    LearningTrack {
                        title: "Tactical Vision".to_string(),
                        level: "Intermediate".to_string(),
                        summary: "Forks, pins, skewers and calculation drills.".to_string(),
                        topics: vec![
                            "Double attacks".to_string(),
                            "Calculation".to_string(),
                        ],
                    },
                    LearningTrack {
                        title: "Tournament Preparation".to_string(),
                        level: "Advanced".to_string(),
                        summary: "Repertoire building, endgame technique and time management."
                            .to_string(),
                        topics: vec![
                            "Repertoire".to_string(),
                            "Rook endgames".to_string(),
                            "Clock handling".to_string(),
                        ],
                    },
                ],
                resources: vec![
                    Resource {
                        title: "Chess-Results".to_string(),
                        kind: "Website".to_string(),
                        url: "https://chess-results.com".to_string(),
                        description: "Pairings and standings for most FIDE-rated events."
                            .to_string(),
                    },
                    Resource {
                        title: "FIDE Ratings".to_string(),
                        kind: "Website".to_string(),
                        url: "https://ratings.fide.com".to_string(),
                        description: "Official rating lists and player profiles.".to_string(),
                    },
                    Resource {
                        title: "Lichess Study".to_string(),
                        kind: "Tool".to_string(),
                        url: "https://lichess.org/study".to_string(),
                        description: "Free interactive boards for preparation.".to_string(),
                    },
                ],
                contact: ContactInfo {
                    email: "hello@chessregistry.my".to_string(),
                    phone: Some("+60 3-0000 0000".to_string()),
                    address: Some("Kuala Lumpur, Malaysia".to_string()),
                    socials: vec![SocialLink {
                        label: "Instagram".to_string(),
                        url: "https://instagram.com/chessregistry".to_string(),
                    }],
                },
            },
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn tournament(
    name: &str,
    location: &str,
    dates: &str,
    category: &str,
    status: TournamentStatus,
    link: Option<&str>,
    country: &str,
    continent: &str,
) -> Tournament {
    Tournament {
        name: name.to_string(),
        location: location.to_string(),
        dates: dates.to_string(),
        category: category.to_string(),
        status,
        link: link.map(str::to_string),
        country: Some(country.to_string()),
        continent: Some(continent.to_string()),
    }
}
