use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::booking::register_booking;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new().route("/", post(register_booking));

    Router::new().nest("/bookings", booking_routers)
}
