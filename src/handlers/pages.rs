use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

static INDEX_HTML: &str = include_str!("../web/index.html");
static SCRIPT_JS: &str = include_str!("../web/script.js");
static AUTH_JS: &str = include_str!("../web/auth.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn javascript(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], body).into_response()
}

pub async fn script_js() -> Response {
    javascript(SCRIPT_JS)
}

pub async fn auth_js() -> Response {
    javascript(AUTH_JS)
}
