use rand::{Rng, distr::Alphanumeric};

use crate::{Error, Res, types::Device};

pub const TOKEN_FILE_PREFIX: &str = "secret-spotify-cli-";
pub const TOKEN_FILE_SUFFIX: &str = ".txt";

/// Builds a fresh token file name matching `secret-spotify-cli-*.txt`.
pub fn token_file_name() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();
    format!("{TOKEN_FILE_PREFIX}{suffix}{TOKEN_FILE_SUFFIX}")
}

pub fn is_token_file_name(name: &str) -> bool {
    name.len() >= TOKEN_FILE_PREFIX.len() + TOKEN_FILE_SUFFIX.len()
        && name.starts_with(TOKEN_FILE_PREFIX)
        && name.ends_with(TOKEN_FILE_SUFFIX)
}

/// Picks a random element, `None` for an empty slice.
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let idx = rand::rng().random_range(0..items.len());
    items.get(idx)
}

/// Parses a menu answer into an index into `devices`.
///
/// Surrounding whitespace (including the trailing newline) is ignored.
pub fn parse_device_index(input: &str, devices: &[Device]) -> Res<usize> {
    let idx: usize = input.trim().parse().map_err(|_| Error::MalformedInput)?;
    if idx >= devices.len() {
        return Err(Error::MalformedInput);
    }
    Ok(idx)
}

/// Renders the device menu, one `[i] name` line per device.
pub fn device_menu(devices: &[Device]) -> String {
    devices
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if d.is_active {
                format!("[{}] {} (current)\n", i, d.name)
            } else {
                format!("[{}] {}\n", i, d.name)
            }
        })
        .collect()
}

/// Joins a base URL and an API path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
