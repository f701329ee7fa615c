use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotctl::{
    Res, cli, config, error,
    management::TokenStore,
    spotify::auth::{LoginConfig, SystemBrowser},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify in the browser
    Login,

    /// Skip to the next track
    Next,

    /// Choose the playback device
    Device,

    /// Play a random playlist
    Random,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn open_store() -> TokenStore {
    match TokenStore::open_or_create(&config::token_dir()).await {
        Ok(store) => store,
        Err(e) => error!("{}", e),
    }
}

async fn login(store: &TokenStore) -> Res<String> {
    let login_config = LoginConfig::from_env()?;
    if login_config.client_id.is_empty() {
        warning!("SPOTIFY_API_AUTH_CLIENT_ID is not set, Spotify will reject the login.");
    }
    cli::login(store, &login_config, &SystemBrowser).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let api_url = config::spotify_apiurl();

    let result = match cli.command {
        Command::Login => login(&open_store().await).await,
        Command::Next => cli::next(&open_store().await, &api_url).await,
        Command::Device => {
            let store = open_store().await;
            let mut input = std::io::stdin().lock();
            cli::device(&store, &api_url, &mut input, &mut std::io::stdout()).await
        }
        Command::Random => cli::random(&open_store().await, &api_url).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            return;
        }
    };

    match result {
        Ok(text) => println!("{}", text.trim_end_matches('\n')),
        Err(e) if e.is_fatal() => error!("{}", e),
        Err(e) => println!("{}", e),
    }
}
