use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::WebinarId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::webinar::{CreateWebinarRequest, WebinarResponse, WebinarsResponse};

pub async fn register_webinar(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateWebinarRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    // 終了日時は開始日時より後でなければならない。
    // 予約ワークフローはこの不変条件を再検証しないため、登録時に保証する
    if req.end_date <= req.start_date {
        return Err(AppError::UnprocessableEntity(
            "終了日時は開始日時より後である必要があります。".into(),
        ));
    }

    // 主催者が実在するユーザーか確認する
    let organizer_id = req.organizer_id.clone().into();
    registry
        .user_repository()
        .find_by_id(&organizer_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "主催者（{organizer_id}）が見つかりませんでした。"
            ))
        })?;

    let webinar_id = registry.webinar_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "webinarId": webinar_id })),
    ))
}

pub async fn show_webinar_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WebinarsResponse>> {
    registry
        .webinar_repository()
        .find_all()
        .await
        .map(WebinarsResponse::from)
        .map(Json)
}

pub async fn show_webinar(
    Path(webinar_id): Path<WebinarId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WebinarResponse>> {
    registry
        .webinar_repository()
        .find_by_id(&webinar_id)
        .await
        .and_then(|w| match w {
            Some(w) => Ok(Json(w.into())),
            None => Err(AppError::EntityNotFound(format!(
                "ウェビナー（{webinar_id}）が見つかりませんでした。"
            ))),
        })
}
