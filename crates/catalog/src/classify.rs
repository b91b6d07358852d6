use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::MediaKind;

/// Closed set of mood tags derived from upstream genre data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum Classification {
    Visceral,
    #[serde(rename = "Avant-Garde")]
    AvantGarde,
    Essential,
    Atmospheric,
    Noir,
    Melancholic,
    Legacy,
    Provocative,
}

impl Classification {
    /// Neutral default used when no genre matches.
    pub const DEFAULT: Classification = Classification::Atmospheric;

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Visceral => "Visceral",
            Classification::AvantGarde => "Avant-Garde",
            Classification::Essential => "Essential",
            Classification::Atmospheric => "Atmospheric",
            Classification::Noir => "Noir",
            Classification::Melancholic => "Melancholic",
            Classification::Legacy => "Legacy",
            Classification::Provocative => "Provocative",
        }
    }

    /// Case-insensitive parse, used by the mood filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "visceral" => Some(Classification::Visceral),
            "avant-garde" => Some(Classification::AvantGarde),
            "essential" => Some(Classification::Essential),
            "atmospheric" => Some(Classification::Atmospheric),
            "noir" => Some(Classification::Noir),
            "melancholic" => Some(Classification::Melancholic),
            "legacy" => Some(Classification::Legacy),
            "provocative" => Some(Classification::Provocative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TMDB genre id to mood tag, in priority order of the upstream genre
/// array: the first recognized id wins.
const GENRE_CLASSIFICATIONS: &[(i64, Classification)] = &[
    (28, Classification::Visceral),      // Action
    (12, Classification::AvantGarde),    // Adventure
    (16, Classification::Essential),     // Animation
    (35, Classification::Atmospheric),   // Comedy
    (80, Classification::Noir),          // Crime
    (99, Classification::Essential),     // Documentary
    (18, Classification::Melancholic),   // Drama
    (10751, Classification::Legacy),     // Family
    (14, Classification::AvantGarde),    // Fantasy
    (36, Classification::Legacy),        // History
    (27, Classification::Noir),          // Horror
    (10402, Classification::Atmospheric),// Music
    (9648, Classification::AvantGarde),  // Mystery
    (10749, Classification::Melancholic),// Romance
    (878, Classification::AvantGarde),   // Sci-Fi
    (10770, Classification::Legacy),     // TV Movie
    (53, Classification::Provocative),   // Thriller
    (10752, Classification::Noir),       // War
    (37, Classification::Legacy),        // Western
];

/// Derive the mood tag for a work from its genre ids.
///
/// The first recognized genre id wins, iterating in the order the
/// upstream supplied them. The result therefore depends on the
/// upstream's (undocumented) genre-array ordering; this matches the
/// product behavior and is intentional. An empty or unrecognized list
/// yields [`Classification::DEFAULT`].
pub fn classify(_kind: MediaKind, genre_ids: &[i64]) -> Classification {
    for id in genre_ids {
        if let Some((_, tag)) = GENRE_CLASSIFICATIONS.iter().find(|(gid, _)| gid == id) {
            return *tag;
        }
    }
    Classification::DEFAULT
}
