pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use rocket::{get, routes, Build, Rocket};
use services::VideoPlatform;
use std::sync::Arc;

pub struct AppState {
    pub youtube: Arc<dyn VideoPlatform>,
}

#[get("/")]
fn index() -> &'static str {
    "Channel timeline backend is running"
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![index])
        .mount("/api", api::routes())
}
