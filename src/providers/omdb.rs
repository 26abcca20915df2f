/// OMDb API provider
///
/// One base URL serves both operations: search (`s=`) returns summaries in
/// pages of ten, lookup (`i=`) returns full details for a single title. The
/// API key and base URL are injected at construction so tests can point the
/// provider at a mock endpoint.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieDetail, MovieSummary, OmdbDetailResponse, OmdbSearchResponse, SearchPage, SearchRequest},
    providers::MovieProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.omdb_api_key.clone(), config.omdb_api_url.clone())
    }

    /// Query parameters for a search request
    ///
    /// `type` and `y` are omitted entirely when their filter is empty: OMDb
    /// treats an empty value as a filter nothing matches, not as a no-op.
    /// Values are percent-encoded by reqwest when the request is built.
    fn search_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("s", request.query.clone()),
            ("page", request.page.to_string()),
            ("apikey", self.api_key.clone()),
        ];

        if let Some(kind) = request.type_filter.as_param() {
            params.push(("type", kind.to_string()));
        }

        let year = request.year_filter.trim();
        if !year.is_empty() {
            params.push(("y", year.to_string()));
        }

        params
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchPage> {
        if request.query.trim().is_empty() {
            return Ok(SearchPage::empty());
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&self.search_params(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body: OmdbSearchResponse = response.json().await?;

        if !body.is_success() {
            // "Movie not found!" and friends: a valid no-matches outcome
            tracing::debug!(
                query = %request.query,
                reason = body.error.as_deref().unwrap_or("unknown"),
                provider = self.name(),
                "Upstream reported no results"
            );
            return Ok(SearchPage::empty());
        }

        let total_results = body.total();
        let items: Vec<MovieSummary> = body.search.into_iter().map(MovieSummary::from).collect();

        tracing::info!(
            query = %request.query,
            page = request.page,
            results = items.len(),
            total_results,
            provider = self.name(),
            "Search completed"
        );

        Ok(SearchPage {
            items,
            total_results,
        })
    }

    async fn lookup(&self, imdb_id: &str) -> AppResult<MovieDetail> {
        if imdb_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "IMDB ID cannot be empty".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("i", imdb_id),
                ("plot", "full"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body: OmdbDetailResponse = response.json().await?;

        if !body.is_success() {
            return Err(AppError::ExternalApi(format!(
                "OMDb lookup failed for {}: {}",
                imdb_id,
                body.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        tracing::info!(imdb_id = %imdb_id, provider = self.name(), "Detail lookup completed");

        Ok(MovieDetail::from(body))
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
