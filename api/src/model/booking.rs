use garde::Validate;
use kernel::model::{
    id::{UserId, WebinarId},
    participation::Participation,
};
use serde::{Deserialize, Serialize};

// 予約操作を行うユーザーの指定
// 認証層はこのコアの範囲外のため、リクエストで明示的に受け取る
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub user_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationsResponse {
    pub items: Vec<ParticipationResponse>,
}

impl From<Vec<Participation>> for ParticipationsResponse {
    fn from(value: Vec<Participation>) -> Self {
        Self {
            items: value.into_iter().map(ParticipationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationResponse {
    pub user_id: UserId,
    pub webinar_id: WebinarId,
}

impl From<Participation> for ParticipationResponse {
    fn from(value: Participation) -> Self {
        let Participation {
            user_id,
            webinar_id,
        } = value;
        Self {
            user_id,
            webinar_id,
        }
    }
}
