use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{book_seat, show_participations};
use crate::handler::webinar::{register_webinar, show_webinar, show_webinar_list};

pub fn build_webinar_routers() -> Router<AppRegistry> {
    let webinars_routers = Router::new()
        .route("/", post(register_webinar))
        .route("/", get(show_webinar_list))
        .route("/:webinar_id", get(show_webinar))
        .route("/:webinar_id/bookings", post(book_seat))
        .route("/:webinar_id/participations", get(show_participations));

    Router::new().nest("/webinars", webinars_routers)
}
