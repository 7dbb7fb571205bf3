use crate::domain::{Account, AccountUpdate, NewAccount};
use crate::handlers::shared_types::{error_status, ApiResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
}

/// Handler for listing accounts (GET /accounts).
///
/// Newest accounts come first. `?status=active` restricts the listing to
/// one status.
#[tracing::instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ApiResponse<Vec<Account>>, StatusCode> {
    // ---
    let accounts = state
        .repository()
        .list(query.status.as_deref())
        .await
        .map_err(|e| error_status(&e))?;

    Ok(ApiResponse { data: accounts })
}

/// Handler for fetching one account by email (GET /accounts/{email}).
///
/// - `200 OK` with the account as JSON.
/// - `404 Not Found` if no account has that email.
#[tracing::instrument(skip(state))]
pub async fn get_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<ApiResponse<Account>, StatusCode> {
    // ---
    state
        .repository()
        .get(&email)
        .await
        .map_err(|e| error_status(&e))?
        .map(|account| ApiResponse { data: account })
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handler for creating an account (POST /accounts).
///
/// - `201 Created` with the stored row (defaults filled in).
/// - `400 Bad Request` if email, user or token is blank.
/// - `409 Conflict` if the email is already registered.
#[tracing::instrument(skip(state, account), fields(email = %account.email))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(account): Json<NewAccount>,
) -> Result<(StatusCode, ApiResponse<Account>), StatusCode> {
    // ---
    if [&account.email, &account.user, &account.token]
        .iter()
        .any(|v| v.trim().is_empty())
    {
        return Err(StatusCode::BAD_REQUEST);
    }

    let created = state
        .repository()
        .create(account)
        .await
        .map_err(|e| error_status(&e))?;

    state.metrics().record_account_created();
    tracing::info!("Created account {}", created.email);

    Ok((StatusCode::CREATED, ApiResponse { data: created }))
}

/// Handler for partially updating an account (PUT /accounts/{email}).
///
/// Only the fields present in the body change.
/// - `200 OK` with the updated row.
/// - `404 Not Found` if no account has that email.
#[tracing::instrument(skip(state, changes))]
pub async fn update_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(changes): Json<AccountUpdate>,
) -> Result<ApiResponse<Account>, StatusCode> {
    // ---
    state
        .repository()
        .update(&email, changes)
        .await
        .map_err(|e| error_status(&e))?
        .map(|account| ApiResponse { data: account })
        .ok_or(StatusCode::NOT_FOUND)
}

/// Delete an account by email (DELETE /accounts/{email}).
///
/// Returns:
/// - `204 No Content` if the account was deleted.
/// - `404 Not Found` if no account has that email.
#[tracing::instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode, StatusCode> {
    // ---
    let removed = state
        .repository()
        .delete(&email)
        .await
        .map_err(|e| error_status(&e))?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
