use axum::response::Html;

pub const INDEX_HTML: &str = "<h1>URL Shortener App</h1>";

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
