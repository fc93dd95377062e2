//! Account endpoints. There is no persistent store behind this deployment, so
//! signup and login answer with fixed "disabled" replies.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;

static SIGNUP_HTML: &str = include_str!("../web/signup.html");
static LOGIN_HTML: &str = include_str!("../web/login.html");

const SIGNUP_DISABLED: &str =
    "Signup is disabled for this free deployment due to lack of a persistent database.";
const LOGIN_DISABLED: &str =
    "Login is disabled for this free deployment due to lack of a persistent database.";

pub async fn signup_page() -> Html<&'static str> {
    Html(SIGNUP_HTML)
}

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

// POST /signup
pub async fn signup() -> Response {
    (StatusCode::OK, Json(json!({ "message": SIGNUP_DISABLED }))).into_response()
}

// POST /login
pub async fn login() -> AppError {
    AppError::Unauthorized(LOGIN_DISABLED.to_string())
}

// POST /logout
pub async fn logout() -> Json<serde_json::Value> {
    Json(json!({ "message": "Logged out successfully" }))
}

// GET /get-user-id
pub async fn get_user_id() -> Json<serde_json::Value> {
    Json(json!({ "userId": "Not persistent" }))
}
