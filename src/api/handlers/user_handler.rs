//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::{JsonBody, UserId};
use crate::api::AppState;
use crate::config::DELETED_USER_MESSAGE;
use crate::domain::{User, UserInput, UserView};
use crate::errors::{AppError, AppResult};

/// Delete confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "Deleted user")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed JSON, validation errors or store failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .user_service
        .create_user(input)
        .await
        .map_err(AppError::into_client_error)?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users with their age
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserView>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserView>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID with their age
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with age", body = UserView),
        (status = 400, description = "Non-integer ID"),
        (status = 500, description = "Store failure, including unknown ID")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserView>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user's name and date of birth
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 201, description = "User updated", body = User),
        (status = 400, description = "Non-integer ID, malformed JSON or validation errors"),
        (status = 500, description = "Store failure, including unknown ID")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(input): JsonBody<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.update_user(id, input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Non-integer ID"),
        (status = 500, description = "Store failure, including unknown ID")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<DeleteUserResponse>> {
    let id = state.user_service.delete_user(id).await?;

    Ok(Json(DeleteUserResponse {
        message: DELETED_USER_MESSAGE.to_string(),
        id,
    }))
}
