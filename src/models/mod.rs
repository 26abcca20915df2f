use serde::{Deserialize, Serialize};

/// Local asset reference used when the upstream has no poster for an item
pub const FALLBACK_POSTER: &str = "assets/movie-icon.svg";

/// Kind of media an item represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Episode,
}

impl From<&str> for MediaKind {
    fn from(kind: &str) -> Self {
        match kind {
            "series" => MediaKind::Series,
            "episode" => MediaKind::Episode,
            _ => MediaKind::Movie,
        }
    }
}

/// Media type filter for searches
///
/// `All` means the upstream `type` parameter is omitted entirely. OMDb treats
/// an empty `type=` value as a filter nothing matches, not as a no-op, so the
/// parameter must never be sent with an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Series,
    Episode,
}

impl TypeFilter {
    /// Upstream query-parameter value; `None` when the filter is off
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Movie => Some("movie"),
            TypeFilter::Series => Some("series"),
            TypeFilter::Episode => Some("episode"),
        }
    }
}

/// One normalized search result consumed by list renderers
///
/// The poster fallback has already been applied; `poster_url` is always
/// renderable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// Release year as the upstream reports it; series use ranges like
    /// "2008–2013"
    pub year: String,
    pub poster_url: String,
    pub kind: MediaKind,
}

/// Full details for one title, consumed by the detail-panel renderer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub kind: MediaKind,
    pub poster_url: String,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub imdb_rating: Option<String>,
}

/// One page of normalized search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    pub total_results: u32,
}

impl SearchPage {
    /// The "no matches" outcome; also what transport failures coerce to
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Provider input shape: one search as the controller dispatches it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub type_filter: TypeFilter,
    /// Numeric year or empty; omitted from the request when empty
    pub year_filter: String,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw OMDb search response
///
/// OMDb reports failure in-band: HTTP 200 with `Response: "False"` and an
/// `Error` string, both for "no matches" and for things like a bad API key.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    /// Total result count; OMDb serializes it as a string
    pub fn total(&self) -> u32 {
        self.total_results
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0)
    }
}

/// One item of an OMDb search response
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl From<OmdbSearchItem> for MovieSummary {
    fn from(item: OmdbSearchItem) -> Self {
        let poster_url = if item.poster == "N/A" {
            FALLBACK_POSTER.to_string()
        } else {
            item.poster
        };

        MovieSummary {
            imdb_id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url,
            kind: MediaKind::from(item.kind.as_str()),
        }
    }
}

/// Raw OMDb detail response (`i=<imdbID>` lookup)
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
}

impl OmdbDetailResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// OMDb fills absent detail fields with the literal string "N/A"
fn not_available(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A")
}

impl From<OmdbDetailResponse> for MovieDetail {
    fn from(detail: OmdbDetailResponse) -> Self {
        let poster_url = match detail.poster {
            Some(p) if p != "N/A" => p,
            _ => FALLBACK_POSTER.to_string(),
        };

        MovieDetail {
            imdb_id: detail.imdb_id.unwrap_or_default(),
            title: detail.title.unwrap_or_default(),
            year: detail.year.unwrap_or_default(),
            kind: MediaKind::from(detail.kind.as_deref().unwrap_or("movie")),
            poster_url,
            rated: not_available(detail.rated),
            released: not_available(detail.released),
            runtime: not_available(detail.runtime),
            genre: not_available(detail.genre),
            director: not_available(detail.director),
            actors: not_available(detail.actors),
            plot: not_available(detail.plot),
            imdb_rating: not_available(detail.imdb_rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!(MediaKind::from("movie"), MediaKind::Movie);
        assert_eq!(MediaKind::from("series"), MediaKind::Series);
        assert_eq!(MediaKind::from("episode"), MediaKind::Episode);
        // Unknown kinds (OMDb also has "game") fall back to Movie
        assert_eq!(MediaKind::from("game"), MediaKind::Movie);
    }

    #[test]
    fn test_type_filter_as_param() {
        assert_eq!(TypeFilter::All.as_param(), None);
        assert_eq!(TypeFilter::Movie.as_param(), Some("movie"));
        assert_eq!(TypeFilter::Series.as_param(), Some("series"));
        assert_eq!(TypeFilter::Episode.as_param(), Some("episode"));
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Batman Begins",
                    "Year": "2005",
                    "imdbID": "tt0372784",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/batman.jpg"
                },
                {
                    "Title": "Batman: The Animated Series",
                    "Year": "1992–1995",
                    "imdbID": "tt0103359",
                    "Type": "series",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "95",
            "Response": "True"
        }"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.total(), 95);
        assert_eq!(response.search.len(), 2);
        assert_eq!(response.search[0].imdb_id, "tt0372784");
    }

    #[test]
    fn test_search_response_no_matches() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error.as_deref(), Some("Movie not found!"));
        assert!(response.search.is_empty());
        assert_eq!(response.total(), 0);
    }

    #[test]
    fn test_poster_fallback_applied() {
        let item = OmdbSearchItem {
            title: "Batman: The Animated Series".to_string(),
            year: "1992–1995".to_string(),
            imdb_id: "tt0103359".to_string(),
            kind: "series".to_string(),
            poster: "N/A".to_string(),
        };

        let summary = MovieSummary::from(item);
        assert_eq!(summary.poster_url, FALLBACK_POSTER);
        assert_eq!(summary.kind, MediaKind::Series);
    }

    #[test]
    fn test_poster_passes_through_when_present() {
        let item = OmdbSearchItem {
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            imdb_id: "tt0372784".to_string(),
            kind: "movie".to_string(),
            poster: "https://m.media-amazon.com/images/M/batman.jpg".to_string(),
        };

        let summary = MovieSummary::from(item);
        assert_eq!(
            summary.poster_url,
            "https://m.media-amazon.com/images/M/batman.jpg"
        );
    }

    #[test]
    fn test_total_results_unparseable_defaults_to_zero() {
        let json = r#"{"Response":"True","Search":[],"totalResults":"many"}"#;

        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total(), 0);
    }

    #[test]
    fn test_detail_response_conversion() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Rated": "PG-13",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "N/A",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Type": "movie",
            "Response": "True"
        }"#;

        let response: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());

        let detail = MovieDetail::from(response);
        assert_eq!(detail.imdb_id, "tt1375666");
        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.kind, MediaKind::Movie);
        assert_eq!(detail.poster_url, FALLBACK_POSTER);
        assert_eq!(detail.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(detail.imdb_rating.as_deref(), Some("8.8"));
    }

    #[test]
    fn test_detail_na_fields_map_to_none() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1921",
            "Rated": "N/A",
            "Plot": "N/A",
            "imdbID": "tt0000001",
            "Type": "movie",
            "Response": "True"
        }"#;

        let detail = MovieDetail::from(
            serde_json::from_str::<OmdbDetailResponse>(json).unwrap(),
        );
        assert_eq!(detail.rated, None);
        assert_eq!(detail.plot, None);
        assert_eq!(detail.released, None);
    }
}
