use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::WebinarId, participation::Participation};
use kernel::repository::participation::ParticipationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::participation::ParticipationRow, ConnectionPool};

#[derive(new)]
pub struct ParticipationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ParticipationRepository for ParticipationRepositoryImpl {
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>> {
        let rows: Vec<ParticipationRow> = sqlx::query_as(
            r#"
                SELECT user_id, webinar_id
                FROM participations
                WHERE webinar_id = $1
            "#,
        )
        .bind(webinar_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Participation::from).collect())
    }

    // (user_id, webinar_id) は participations テーブルの複合主キーであり、
    // 同時実行時の重複はここで一意性違反として弾かれる
    async fn save(&self, participation: Participation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO participations (user_id, webinar_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(&participation.user_id)
        .bind(&participation.webinar_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No participation record has been created".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use kernel::model::user::event::CreateUser;
    use kernel::model::webinar::event::CreateWebinar;
    use kernel::repository::user::UserRepository;
    use kernel::repository::webinar::WebinarRepository;

    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use crate::repository::webinar::WebinarRepositoryImpl;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_save_and_find_participations(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let user_repo = UserRepositoryImpl::new(db.clone());
        let webinar_repo = WebinarRepositoryImpl::new(db.clone());
        let repo = ParticipationRepositoryImpl::new(db);

        let organizer_id = user_repo
            .create(CreateUser {
                email: "organizer@example.com".into(),
                password: "password123".into(),
            })
            .await?;
        let user_id = user_repo
            .create(CreateUser {
                email: "user@example.com".into(),
                password: "password123".into(),
            })
            .await?;

        let webinar_id = webinar_repo
            .create(CreateWebinar {
                organizer_id,
                title: "My Webinar".into(),
                start_date: Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2024, 1, 10, 11, 0, 0).unwrap(),
                seats: 10,
            })
            .await?;

        let res = repo.find_by_webinar_id(&webinar_id).await?;
        assert!(res.is_empty());

        repo.save(Participation {
            user_id: user_id.clone(),
            webinar_id: webinar_id.clone(),
        })
        .await?;

        let res = repo.find_by_webinar_id(&webinar_id).await?;
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].user_id, user_id);
        assert_eq!(res[0].webinar_id, webinar_id);

        // 複合主キーにより同じ (user_id, webinar_id) の二重保存は失敗する
        let res = repo
            .save(Participation {
                user_id: user_id.clone(),
                webinar_id: webinar_id.clone(),
            })
            .await;
        assert!(res.is_err());

        Ok(())
    }
}
