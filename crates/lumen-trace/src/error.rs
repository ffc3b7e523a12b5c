use std::fmt;

/// Rejected [`RenderConfig`](crate::scale::RenderConfig).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid render config: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Failure to encode, decode or move a remote position update.
#[derive(Debug)]
pub enum RemoteError {
    /// Payload was not a valid position update.
    Decode(serde_json::Error),
    /// Update could not be serialized.
    Encode(serde_json::Error),
    /// Decoded update violates the message contract (e.g. coordinates out of range).
    Invalid(String),
    /// The transport failed to send.
    Io(std::io::Error),
    /// The other end of the channel is gone.
    Disconnected,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Decode(e) => write!(f, "malformed position update: {e}"),
            RemoteError::Encode(e) => write!(f, "failed to encode position update: {e}"),
            RemoteError::Invalid(msg) => write!(f, "invalid position update: {msg}"),
            RemoteError::Io(e) => write!(f, "remote channel i/o error: {e}"),
            RemoteError::Disconnected => f.write_str("remote channel disconnected"),
        }
    }
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemoteError::Decode(e) | RemoteError::Encode(e) => Some(e),
            RemoteError::Io(e) => Some(e),
            RemoteError::Invalid(_) | RemoteError::Disconnected => None,
        }
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(e: std::io::Error) -> Self {
        RemoteError::Io(e)
    }
}
