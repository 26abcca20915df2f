/// Application-level errors
///
/// Transport and upstream failures are typed here. A search that matches
/// nothing is NOT an error: providers return an empty page for it, and the
/// controller coerces the errors below to the same empty outcome after
/// logging them, so rendering collaborators never see a hard failure.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;
