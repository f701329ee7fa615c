use std::path::{Path, PathBuf};

use crate::{Error, Res, utils};

/// Handle on the file holding the bearer token.
///
/// The file lives in a well known directory (the OS temp dir by default) and
/// is found by the `secret-spotify-cli-*.txt` pattern, so a login from one
/// invocation is picked up by the next one. Its content is the raw token with
/// no additional structure.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Returns the first file in `dir` matching the secret-file pattern.
    pub fn locate(dir: &Path) -> Option<PathBuf> {
        let entries = std::fs::read_dir(dir).ok()?;
        let mut matches: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map(utils::is_token_file_name)
                    .unwrap_or(false)
            })
            .map(|entry| entry.path())
            .collect();
        matches.sort();
        matches.into_iter().next()
    }

    /// Opens the token file in `dir`, creating an empty one if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if a new file cannot be created; the
    /// tool cannot work without somewhere to keep the token.
    pub async fn open_or_create(dir: &Path) -> Res<Self> {
        if let Some(path) = Self::locate(dir) {
            return Ok(Self { path });
        }

        let path = dir.join(utils::token_file_name());
        async_fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                Error::Environment(format!(
                    "cannot create token file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self { path })
    }

    /// Reads the stored token.
    ///
    /// Fails with [`Error::NoToken`] when the file is empty or unreadable.
    pub async fn read(&self) -> Res<String> {
        let token = async_fs::read_to_string(&self.path)
            .await
            .map_err(|_| Error::NoToken)?;
        if token.is_empty() {
            return Err(Error::NoToken);
        }
        Ok(token)
    }

    /// Replaces the file content with `token`.
    pub async fn write(&self, token: &str) -> Res<()> {
        async_fs::write(&self.path, token.as_bytes()).await?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
