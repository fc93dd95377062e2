pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/static/script.js", get(handlers::pages::script_js))
        .route("/static/auth.js", get(handlers::pages::auth_js))
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/signup",
            get(handlers::account::signup_page).post(handlers::account::signup),
        )
        .route(
            "/login",
            get(handlers::account::login_page).post(handlers::account::login),
        )
        .route("/logout", post(handlers::account::logout))
        .route("/get-user-id", get(handlers::account::get_user_id))
        .route("/upload-report", post(handlers::uploads::upload_report))
        .route(
            "/upload-smartwatch-data",
            post(handlers::uploads::upload_smartwatch_data),
        )
        .with_state(state)
}
