use kernel::model::{
    id::{UserId, WebinarId},
    webinar::Webinar,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct WebinarRow {
    pub webinar_id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl From<WebinarRow> for Webinar {
    fn from(value: WebinarRow) -> Self {
        let WebinarRow {
            webinar_id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = value;
        Webinar {
            id: webinar_id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        }
    }
}
