use kernel::model::{
    id::{UserId, WebinarId},
    participation::Participation,
};

#[derive(sqlx::FromRow)]
pub struct ParticipationRow {
    pub user_id: UserId,
    pub webinar_id: WebinarId,
}

impl From<ParticipationRow> for Participation {
    fn from(value: ParticipationRow) -> Self {
        let ParticipationRow {
            user_id,
            webinar_id,
        } = value;
        Participation {
            user_id,
            webinar_id,
        }
    }
}
