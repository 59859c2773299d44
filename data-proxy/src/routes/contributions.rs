use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::external::ProviderError;
use crate::models::GitHubData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub username: Option<String>,
}

/// `GET /api/get-data?username=...`
///
/// Fetches the current year's contributions for `username` and reshapes them
/// into `{ username, contributions, total }`.
pub async fn get_data(
    State(state): State<AppState>,
    query: Result<Query<DataQuery>, QueryRejection>,
) -> Result<Json<GitHubData>, ApiError> {
    // Undecodable query strings get the same JSON body as a missing username
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected get-data query: {}", rejection);
        ApiError::Validation
    })?;

    let username = query
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::Validation)?;

    let year = state.current_year();

    let response = match state.provider.fetch_year(username, year).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ProviderError::Status(status) => {
                    warn!("Provider rejected {} for {}: {}", username, year, status)
                }
                _ => error!("Failed to fetch contributions for {} ({}): {}", username, year, err),
            }
            return Err(err.into());
        }
    };

    let total = response.total_for(year);
    info!(
        "Fetched {} days for {} ({} contributions in {})",
        response.contributions.len(),
        username,
        total,
        year
    );

    Ok(Json(GitHubData {
        username: username.to_string(),
        contributions: response.contributions,
        total,
    }))
}
