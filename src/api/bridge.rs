use axum::response::Html;

const BRIDGE_PAGE: &str = include_str!("bridge.html");

/// Serves the page the provider redirects to after authorization.
///
/// The implicit grant delivers the token in the URL fragment, which browsers
/// never send to the server, so the page reads it client side and calls
/// `/token/store` with it as a query parameter.
pub async fn bridge() -> Html<&'static str> {
    Html(BRIDGE_PAGE)
}
