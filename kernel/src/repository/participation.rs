use crate::model::{id::WebinarId, participation::Participation};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    // ウェビナー ID に紐づく現在の参加一覧を取得する。順序は保証しない
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>>;
    // 参加を 1 件永続化する
    async fn save(&self, participation: Participation) -> AppResult<()>;
}
