use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::WebinarId,
    webinar::{event::CreateWebinar, Webinar},
};
use kernel::repository::webinar::WebinarRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::webinar::WebinarRow, ConnectionPool};

#[derive(new)]
pub struct WebinarRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl WebinarRepository for WebinarRepositoryImpl {
    async fn create(&self, event: CreateWebinar) -> AppResult<WebinarId> {
        let webinar_id = WebinarId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO webinars
                (webinar_id, organizer_id, title, start_date, end_date, seats)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&webinar_id)
        .bind(&event.organizer_id)
        .bind(&event.title)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.seats)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No webinar record has been created".into(),
            ));
        }

        Ok(webinar_id)
    }

    async fn find_by_id(&self, webinar_id: &WebinarId) -> AppResult<Option<Webinar>> {
        let row: Option<WebinarRow> = sqlx::query_as(
            r#"
                SELECT webinar_id, organizer_id, title, start_date, end_date, seats
                FROM webinars
                WHERE webinar_id = $1
            "#,
        )
        .bind(webinar_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Webinar::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Webinar>> {
        let rows: Vec<WebinarRow> = sqlx::query_as(
            r#"
                SELECT webinar_id, organizer_id, title, start_date, end_date, seats
                FROM webinars
                ORDER BY start_date ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Webinar::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    use super::*;
    use crate::repository::user::UserRepositoryImpl;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_webinar(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let user_repo = UserRepositoryImpl::new(db.clone());
        let repo = WebinarRepositoryImpl::new(db);

        let organizer_id = user_repo
            .create(CreateUser {
                email: "organizer@example.com".into(),
                password: "password123".into(),
            })
            .await?;

        let webinar = CreateWebinar {
            organizer_id: organizer_id.clone(),
            title: "My Webinar".into(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 10, 11, 0, 0).unwrap(),
            seats: 10,
        };

        let webinar_id = repo.create(webinar).await?;

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 1);

        let res = repo.find_by_id(&webinar_id).await?;
        assert!(res.is_some());

        let Webinar {
            id,
            organizer_id: found_organizer_id,
            title,
            seats,
            ..
        } = res.unwrap();
        assert_eq!(id, webinar_id);
        assert_eq!(found_organizer_id, organizer_id);
        assert_eq!(title, "My Webinar");
        assert_eq!(seats, 10);

        Ok(())
    }
}
