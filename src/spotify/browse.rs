use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    Error, Res,
    spotify::request::{Session, classify},
    types::{CategoriesResponse, Category, CategoryPlaylistsResponse, Playlist},
};

const PAGE_LIMIT: u32 = 50;

/// Fetches the first page of browse categories.
pub async fn get_categories(session: &Session) -> Res<Vec<Category>> {
    let path = format!("/browse/categories?limit={}", PAGE_LIMIT);
    let res: CategoriesResponse = get_json(session, &path).await?;
    Ok(res.categories.items)
}

/// Fetches the first page of playlists of a category, dropping `null` entries.
pub async fn get_category_playlists(session: &Session, category_id: &str) -> Res<Vec<Playlist>> {
    let path = format!(
        "/browse/categories/{id}/playlists?limit={limit}",
        id = category_id,
        limit = PAGE_LIMIT
    );
    let res: CategoryPlaylistsResponse = get_json(session, &path).await?;
    Ok(res.playlists.items.into_iter().flatten().collect())
}

async fn get_json<T: DeserializeOwned>(session: &Session, path: &str) -> Res<T> {
    let response = session.send(Method::GET, path).await?;
    classify(response.status())?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| Error::Decode(format!("{}: {}", path, e)))
}
