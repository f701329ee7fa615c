pub async fn health() -> &'static str {
    "alive"
}
