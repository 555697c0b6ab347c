use crate::model::id::UserId;
use chrono::{DateTime, Utc};

pub struct CreateWebinar {
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
