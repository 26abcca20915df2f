//! Debounced movie search controller over the OMDb HTTP API.
//!
//! A rendering layer drives [`SearchController`] with user events (keystrokes,
//! filter changes, page clicks, selection) and reads state snapshots back.
//! The controller collapses keystroke bursts into one upstream search per
//! quiet period, keeps the page clamped to the result total, and renders a
//! bounded pagination window for any result count. Upstream failures are
//! logged and degrade to the "no matches" outcome; they never reach the
//! rendering layer as errors.
//!
//! ```no_run
//! use std::sync::Arc;
//! use omdb_search::{Config, OmdbProvider, SearchController, TypeFilter};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let provider = Arc::new(OmdbProvider::from_config(&config));
//! let controller = SearchController::from_config(provider, &config);
//!
//! controller.on_text_change("blade runner");
//! // ...600ms of quiet later, results() holds page 1...
//! controller.set_type_filter(TypeFilter::Movie).await;
//! controller.set_page(2).await;
//! for item in controller.results() {
//!     println!("{} ({})", item.title, item.year);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod pagination;
pub mod providers;

pub use config::Config;
pub use controller::{SearchController, SearchState, DEFAULT_DEBOUNCE};
pub use error::{AppError, AppResult};
pub use models::{
    MediaKind, MovieDetail, MovieSummary, SearchPage, SearchRequest, TypeFilter, FALLBACK_POSTER,
};
pub use pagination::{page_window, total_pages, PageEntry, PAGE_SIZE};
pub use providers::{MovieProvider, OmdbProvider};
