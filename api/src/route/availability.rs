use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::availability::get_availability;

pub fn build_availability_routers() -> Router<AppRegistry> {
    let availability_routers = Router::new().route("/", get(get_availability));

    Router::new().nest("/availability", availability_routers)
}
