use crate::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザー登録を行う
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    // ユーザー ID からユーザーを取得する。存在しない場合は None を返す
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;
    // すべてのユーザーを取得する
    async fn find_all(&self) -> AppResult<Vec<User>>;
}
