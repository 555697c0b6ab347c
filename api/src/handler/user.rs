use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::user::{CreateUserRequest, UsersResponse};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let user_id = registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "userId": user_id })),
    ))
}

pub async fn show_user_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}
