use thiserror::Error;

/// Failure classes surfaced by the gateway and the session layer.
///
/// Zero results is deliberately not represented here: an empty result set is
/// a valid success and is reported as an outcome, not an error.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// A required input was missing or blank before any lookup was attempted.
    #[error("missing required input: {0}")]
    Validation(String),

    /// The token exchange with the upstream service failed.
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// The upstream search call failed (network error or non-2xx response).
    #[error("airport search failed: {0}")]
    Upstream(String),
}
