use std::sync::Arc;

use derive_new::new;
use shared::error::AppError;
use thiserror::Error;

use crate::mailer::{Email, Mailer};
use crate::model::{id::WebinarId, participation::Participation, user::User};
use crate::repository::{
    participation::ParticipationRepository, user::UserRepository, webinar::WebinarRepository,
};

pub struct BookSeatRequest {
    pub webinar_id: WebinarId,
    // 予約操作を行うユーザー。呼び出し側が解決済みの値を渡す
    pub user: User,
}

#[derive(Debug, Error)]
pub enum BookSeatError {
    #[error("指定のウェビナーが見つかりませんでした。")]
    WebinarNotFound,
    #[error("ウェビナーの座席数が上限に達しています。")]
    WebinarNotEnoughSeats,
    #[error("ユーザーはすでにこのウェビナーに参加しています。")]
    UserAlreadyParticipating,
    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<BookSeatError> for AppError {
    fn from(value: BookSeatError) -> Self {
        match value {
            e @ BookSeatError::WebinarNotFound => AppError::EntityNotFound(e.to_string()),
            e @ (BookSeatError::WebinarNotEnoughSeats | BookSeatError::UserAlreadyParticipating) => {
                AppError::UnprocessableEntity(e.to_string())
            }
            BookSeatError::Repository(e) => e,
        }
    }
}

#[derive(new)]
pub struct BookSeat {
    participation_repository: Arc<dyn ParticipationRepository>,
    user_repository: Arc<dyn UserRepository>,
    webinar_repository: Arc<dyn WebinarRepository>,
    mailer: Arc<dyn Mailer>,
}

impl BookSeat {
    pub async fn execute(&self, request: BookSeatRequest) -> Result<(), BookSeatError> {
        let BookSeatRequest { webinar_id, user } = request;

        // ウェビナーが存在するか確認する
        let webinar = self
            .webinar_repository
            .find_by_id(&webinar_id)
            .await?
            .ok_or(BookSeatError::WebinarNotFound)?;

        // 座席が残っているか確認する
        // 満席（参加数 == seats）の時点で以降の予約は拒否する
        let participations = self
            .participation_repository
            .find_by_webinar_id(&webinar_id)
            .await?;
        if participations.len() >= webinar.seats as usize {
            return Err(BookSeatError::WebinarNotEnoughSeats);
        }

        // 同一ユーザーの二重予約でないか確認する
        // 満席かつ参加済みの場合は座席数エラーを優先する
        if participations.iter().any(|p| p.user_id == user.id) {
            return Err(BookSeatError::UserAlreadyParticipating);
        }

        self.participation_repository
            .save(Participation {
                user_id: user.id,
                webinar_id,
            })
            .await?;

        // 主催者へ通知メールを送る
        // 主催者が見つからない場合は通知をスキップする（予約自体は成立）
        let organizer = self
            .user_repository
            .find_by_id(&webinar.organizer_id)
            .await?;
        if let Some(organizer) = organizer {
            let email = Email {
                to: organizer.email,
                subject: "New registration for your webinar".into(),
                body: format!(
                    "A new user has registered for your webinar \"{}\".",
                    webinar.title
                ),
            };
            // 参加の保存が完了した時点で予約は確定しているため、
            // 通知の失敗は予約の失敗として扱わない
            if let Err(e) = self.mailer.send(email).await {
                tracing::warn!(
                    error.message = %e,
                    webinar_id = %webinar.id,
                    "主催者への通知メール送信に失敗しました"
                );
            }
        }

        Ok(())
    }
}
