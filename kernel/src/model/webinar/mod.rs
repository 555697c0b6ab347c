use crate::model::id::{UserId, WebinarId};
use chrono::{DateTime, Utc};

pub mod event;

// end_date > start_date と seats > 0 はウェビナー登録時に検証済みであり、
// 予約ワークフローでは再検証しない
#[derive(Debug, Clone)]
pub struct Webinar {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
