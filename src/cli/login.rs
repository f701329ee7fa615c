use crate::{
    Res,
    management::TokenStore,
    spotify::auth::{self, Browser, LoginConfig},
};

pub async fn login(store: &TokenStore, config: &LoginConfig, browser: &dyn Browser) -> Res<String> {
    let outcome = auth::login(store, config, browser).await?;
    Ok(outcome.message().to_string())
}
