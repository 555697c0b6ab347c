use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{UserId, WebinarId};
use kernel::usecase::book_seat::BookSeatRequest;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{CreateBookingRequest, ParticipationsResponse};

pub async fn book_seat(
    Path(webinar_id): Path<WebinarId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    // 予約ワークフローには解決済みのユーザーを渡す
    let user_id = UserId::from(req.user_id);
    let user = registry
        .user_repository()
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("ユーザー（{user_id}）が見つかりませんでした。"))
        })?;

    registry
        .book_seat()
        .execute(BookSeatRequest { webinar_id, user })
        .await?;

    Ok(StatusCode::CREATED)
}

pub async fn show_participations(
    Path(webinar_id): Path<WebinarId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ParticipationsResponse>> {
    registry
        .webinar_repository()
        .find_by_id(&webinar_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "ウェビナー（{webinar_id}）が見つかりませんでした。"
            ))
        })?;

    registry
        .participation_repository()
        .find_by_webinar_id(&webinar_id)
        .await
        .map(ParticipationsResponse::from)
        .map(Json)
}
