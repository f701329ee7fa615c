use crate::{
    Res,
    cli::{open_session, render},
    management::TokenStore,
    spotify,
};

const FAILED: &str = "Cannot move to the next song :(";

pub async fn next(store: &TokenStore, api_url: &str) -> Res<String> {
    let session = match open_session(store, api_url).await {
        Ok(session) => session,
        Err(e) => return render(e, |_| FAILED.to_string()),
    };

    match spotify::player::next(&session).await {
        Ok(()) => Ok("Playing next".to_string()),
        Err(e) => render(e, |e| match e.status() {
            Some(code) => format!("{} (HTTP {})", FAILED, code),
            None => FAILED.to_string(),
        }),
    }
}
