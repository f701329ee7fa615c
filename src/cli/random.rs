use crate::{
    Res,
    cli::{open_session, render},
    management::TokenStore,
    spotify::{browse, player},
    utils,
};

fn no_playlists(reason: impl std::fmt::Display) -> String {
    format!("Cannot get playlists, reason: {}", reason)
}

/// Plays a random playlist out of a random browse category.
pub async fn random(store: &TokenStore, api_url: &str) -> Res<String> {
    let session = match open_session(store, api_url).await {
        Ok(session) => session,
        Err(e) => return render(e, no_playlists),
    };

    let categories = match browse::get_categories(&session).await {
        Ok(categories) => categories,
        Err(e) => return render(e, no_playlists),
    };
    let Some(category) = utils::pick_random(&categories) else {
        return Ok(no_playlists("no categories available"));
    };

    let playlists = match browse::get_category_playlists(&session, &category.id).await {
        Ok(playlists) => playlists,
        Err(e) => return render(e, no_playlists),
    };
    let Some(playlist) = utils::pick_random(&playlists) else {
        return Ok(no_playlists(format!(
            "no playlists in category \"{}\"",
            category.name
        )));
    };

    match player::play(&session, "playlist", &playlist.id).await {
        Ok(()) => Ok(format!(
            "Playing for you now: [Playlist] {} - {}",
            playlist.name,
            playlist.description.as_deref().unwrap_or_default()
        )),
        Err(e) => render(e, |_| "Cannot play random song :(".to_string()),
    }
}
