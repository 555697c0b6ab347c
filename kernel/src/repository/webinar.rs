use crate::model::{
    id::WebinarId,
    webinar::{event::CreateWebinar, Webinar},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait WebinarRepository: Send + Sync {
    // ウェビナー登録を行う
    async fn create(&self, event: CreateWebinar) -> AppResult<WebinarId>;
    // ウェビナー ID からウェビナーを取得する。存在しない場合は None を返す
    async fn find_by_id(&self, webinar_id: &WebinarId) -> AppResult<Option<Webinar>>;
    // すべてのウェビナーを取得する
    async fn find_all(&self) -> AppResult<Vec<Webinar>>;
}
