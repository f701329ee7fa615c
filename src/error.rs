use thiserror::Error;

/// Every failure a command can run into.
///
/// Most variants are recoverable: the command handlers render them as a single
/// line of text and the process exits normally. The variants reported by
/// [`Error::is_fatal`] mean the local environment cannot support the tool at
/// all, and `main` terminates with a diagnostic instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no token stored, login required")]
    NoToken,

    #[error("token was rejected by the remote API")]
    Unauthorized,

    #[error("no playback devices available")]
    NoDevices,

    #[error("malformed input")]
    MalformedInput,

    #[error("cannot access playback devices")]
    DeviceAccess,

    #[error("resource not found")]
    NotFound,

    #[error("remote API returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error("{0}")]
    Environment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Environment(_) | Error::Decode(_) | Error::Io(_))
    }

    /// Status code carried by the error, if the remote produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::NotFound => Some(404),
            Error::Status(code) => Some(*code),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
