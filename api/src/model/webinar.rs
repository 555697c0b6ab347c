use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{UserId, WebinarId},
    webinar::{event::CreateWebinar, Webinar},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    #[garde(length(min = 1))]
    pub organizer_id: String,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub start_date: DateTime<Utc>,
    #[garde(skip)]
    pub end_date: DateTime<Utc>,
    #[garde(range(min = 1))]
    pub seats: i32,
}

impl From<CreateWebinarRequest> for CreateWebinar {
    fn from(value: CreateWebinarRequest) -> Self {
        let CreateWebinarRequest {
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = value;
        CreateWebinar {
            organizer_id: UserId::from(organizer_id),
            title,
            start_date,
            end_date,
            seats,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarsResponse {
    pub items: Vec<WebinarResponse>,
}

impl From<Vec<Webinar>> for WebinarsResponse {
    fn from(value: Vec<Webinar>) -> Self {
        Self {
            items: value.into_iter().map(WebinarResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarResponse {
    pub webinar_id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl From<Webinar> for WebinarResponse {
    fn from(value: Webinar) -> Self {
        let Webinar {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = value;
        Self {
            webinar_id: id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        }
    }
}
