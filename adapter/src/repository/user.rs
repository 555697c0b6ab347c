use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, email, password)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user_id)
        .bind(&event.email)
        .bind(&event.password)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(user_id)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, password
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, password
                FROM users
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create(CreateUser {
                email: "user@example.com".into(),
                password: "password123".into(),
            })
            .await?;

        let res = repo.find_by_id(&user_id).await?;
        assert!(res.is_some());

        let User { id, email, .. } = res.unwrap();
        assert_eq!(id, user_id);
        assert_eq!(email, "user@example.com");

        let res = repo.find_by_id(&"non-existent-user".into()).await?;
        assert!(res.is_none());

        Ok(())
    }
}
