//! Types exchanged with a metadata search service.
//!
//! The parser produces a search query; the search service answers with
//! [`SearchCandidate`]s (and, for series, [`SeasonSummary`]s); the user's
//! choice is sent back as a [`Correction`]. Nothing here performs I/O.

use mediatitle_parser::ParsedTitle;
use serde::{Deserialize, Serialize};

/// Whether a candidate is a film or an episodic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

/// A single result returned by a metadata search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Service-specific identifier.
    pub id: u64,
    pub title: String,
    pub kind: MediaKind,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release or first air date as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One season of a series candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub name: String,
    #[serde(default)]
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CorrectionError {
    #[error("Folder path is empty")]
    EmptyFolder,

    #[error("Season index {index} out of range ({len} seasons)")]
    SeasonOutOfRange { index: usize, len: usize },

    #[error("Movie candidate {0} cannot take a season")]
    SeasonOnMovie(u64),
}

/// The user's chosen match for a library folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub folder_path: String,
    pub media_id: u64,
    pub title: String,
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_name: Option<String>,
}

impl Correction {
    /// Build the payload for `folder` matched to `candidate`.
    ///
    /// `season` is the season list shown to the user and the index they
    /// picked. The season is only recorded when it is not the first entry
    /// of the list, since the first season is what the service assumes.
    pub fn new(
        folder: &str,
        candidate: &SearchCandidate,
        season: Option<(&[SeasonSummary], usize)>,
    ) -> Result<Self, CorrectionError> {
        let folder = folder.trim();
        if folder.is_empty() {
            return Err(CorrectionError::EmptyFolder);
        }

        let mut correction = Self {
            folder_path: folder.to_string(),
            media_id: candidate.id,
            title: candidate.title.clone(),
            kind: candidate.kind,
            poster_path: candidate.poster_path.clone(),
            release_date: candidate.release_date.clone(),
            overview: candidate.overview.clone(),
            rating: candidate.rating,
            season_number: None,
            season_name: None,
        };

        if let Some((seasons, index)) = season {
            if candidate.kind == MediaKind::Movie {
                return Err(CorrectionError::SeasonOnMovie(candidate.id));
            }
            let chosen = seasons.get(index).ok_or(CorrectionError::SeasonOutOfRange {
                index,
                len: seasons.len(),
            })?;
            if index > 0 {
                correction.season_number = Some(chosen.season_number);
                correction.season_name = Some(chosen.name.clone());
            }
        }

        Ok(correction)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The text to send to the search service for a parsed title.
///
/// Falls back to the original title (underscores as spaces) when parsing
/// stripped everything, and gives `None` when there is nothing to search.
pub fn search_query(parsed: &ParsedTitle) -> Option<String> {
    let clean = parsed.clean_title().trim();
    if !clean.is_empty() {
        return Some(clean.to_string());
    }

    let fallback = parsed.original_title().replace('_', " ");
    let fallback = fallback.trim();
    if fallback.is_empty() {
        None
    } else {
        Some(fallback.to_string())
    }
}

/// Index of the season to preselect for a series.
///
/// Prefers the season matching `hint` (usually the parsed season number),
/// then the first regular season, skipping specials numbered 0.
pub fn default_season(seasons: &[SeasonSummary], hint: Option<u32>) -> Option<usize> {
    if let Some(hint) = hint {
        if let Some(index) = seasons.iter().position(|s| s.season_number == hint) {
            return Some(index);
        }
    }

    seasons
        .iter()
        .position(|s| s.season_number >= 1)
        .or_else(|| (!seasons.is_empty()).then_some(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediatitle_parser::parse;

    fn season(number: u32, name: &str) -> SeasonSummary {
        SeasonSummary {
            season_number: number,
            name: name.to_string(),
            episode_count: None,
            air_date: None,
            poster_path: None,
            overview: None,
        }
    }

    fn candidate(kind: MediaKind) -> SearchCandidate {
        SearchCandidate {
            id: 1399,
            title: "权力的游戏".to_string(),
            kind,
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("2011-04-17".to_string()),
            overview: None,
            rating: Some(8.4),
        }
    }

    #[test]
    fn test_search_query_uses_clean_title() {
        assert_eq!(
            search_query(&parse("权力的游戏 第一季")),
            Some("权力的游戏".to_string())
        );
    }

    #[test]
    fn test_search_query_falls_back_to_original() {
        let parsed = parse("[S01] [2020]");
        assert_eq!(parsed.clean_title(), "");
        assert_eq!(search_query(&parsed), Some("[S01] [2020]".to_string()));

        assert_eq!(search_query(&parse("")), None);
        assert_eq!(search_query(&parse("  ")), None);
    }

    #[test]
    fn test_default_season_prefers_hint() {
        let seasons = [season(0, "Specials"), season(1, "S1"), season(2, "S2")];
        assert_eq!(default_season(&seasons, Some(2)), Some(2));
        assert_eq!(default_season(&seasons, Some(7)), Some(1));
        assert_eq!(default_season(&seasons, None), Some(1));
    }

    #[test]
    fn test_default_season_fallbacks() {
        assert_eq!(default_season(&[season(0, "Specials")], None), Some(0));
        assert_eq!(default_season(&[], Some(1)), None);
    }

    #[test]
    fn test_correction_first_season_omitted() {
        let seasons = [season(1, "第 1 季"), season(2, "第 2 季")];
        let correction = Correction::new(
            "/media/tv/GoT",
            &candidate(MediaKind::Series),
            Some((&seasons[..], 0)),
        )
        .unwrap();
        assert_eq!(correction.season_number, None);
        assert_eq!(correction.season_name, None);

        let json = correction.to_json().unwrap();
        assert!(!json.contains("season_number"));
        assert!(json.contains(r#""kind":"series""#));
    }

    #[test]
    fn test_correction_later_season_included() {
        let seasons = [season(1, "第 1 季"), season(2, "第 2 季")];
        let correction = Correction::new(
            "/media/tv/GoT",
            &candidate(MediaKind::Series),
            Some((&seasons[..], 1)),
        )
        .unwrap();
        assert_eq!(correction.season_number, Some(2));
        assert_eq!(correction.season_name.as_deref(), Some("第 2 季"));
        assert_eq!(correction.media_id, 1399);

        let json: serde_json::Value =
            serde_json::from_str(&correction.to_json().unwrap()).unwrap();
        assert_eq!(json["season_number"], 2);
        assert_eq!(json["poster_path"], "/poster.jpg");
        assert_eq!(json["release_date"], "2011-04-17");
        assert_eq!(json["rating"], 8.4);
        assert!(json.get("overview").is_none());
    }

    #[test]
    fn test_correction_errors() {
        let seasons = [season(1, "S1")];
        assert_eq!(
            Correction::new("  ", &candidate(MediaKind::Series), None),
            Err(CorrectionError::EmptyFolder)
        );
        assert_eq!(
            Correction::new("/m", &candidate(MediaKind::Series), Some((&seasons[..], 3))),
            Err(CorrectionError::SeasonOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            Correction::new("/m", &candidate(MediaKind::Movie), Some((&seasons[..], 0))),
            Err(CorrectionError::SeasonOnMovie(1399))
        );
    }

    #[test]
    fn test_movie_correction() {
        let correction = Correction::new("/media/movies/Dune", &candidate(MediaKind::Movie), None)
            .unwrap();
        assert_eq!(correction.kind, MediaKind::Movie);
        assert_eq!(correction.release_date.as_deref(), Some("2011-04-17"));
        assert_eq!(correction.rating, Some(8.4));

        let json = correction.to_json().unwrap();
        assert!(json.contains(r#""release_date":"2011-04-17""#));
        assert!(json.contains(r#""rating":8.4"#));
        assert!(!json.contains("overview"));
        assert!(!json.contains("season_number"));

        let back: Correction = serde_json::from_str(&correction.to_json().unwrap()).unwrap();
        assert_eq!(back, correction);
    }

    #[test]
    fn test_candidate_deserializes_with_missing_optionals() {
        let c: SearchCandidate =
            serde_json::from_str(r#"{"id": 1, "title": "Dune", "kind": "movie"}"#).unwrap();
        assert_eq!(c.kind, MediaKind::Movie);
        assert_eq!(c.poster_path, None);
    }
}
