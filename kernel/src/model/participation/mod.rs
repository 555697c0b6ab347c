use crate::model::id::{UserId, WebinarId};

// (user_id, webinar_id) の組が参加の同一性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    pub user_id: UserId,
    pub webinar_id: WebinarId,
}
