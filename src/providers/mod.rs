/// Upstream movie data provider abstraction
///
/// The controller talks to the movie database through this trait so that a
/// different upstream (or a scripted stand-in for tests) can be swapped in
/// without touching the controller.
use crate::{
    error::AppResult,
    models::{MovieDetail, SearchPage, SearchRequest},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for titles matching a request
    ///
    /// An empty trimmed query, or an upstream "no matches" answer, is a valid
    /// empty page, not an error. `Err` is reserved for transport failures and
    /// broken upstream responses.
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchPage>;

    /// Fetch full details for one title by IMDB ID
    async fn lookup(&self, imdb_id: &str) -> AppResult<MovieDetail>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
