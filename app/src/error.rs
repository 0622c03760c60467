use strum::Display;
use thiserror::Error;

/// Which request an [`ApiError`] came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Fetch,
    Update,
}

/// All errors generated while talking to the doors API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to {action} door: invalid URL {uri:?}")]
    InvalidUrl { action: Action, uri: String },
    #[error("Failed to {action} door: {reason}")]
    Status { action: Action, reason: String },
    #[error("Failed to {action} door: {source}")]
    Transport {
        action: Action,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to {action} door: invalid response ({source})")]
    Decode {
        action: Action,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything that can stop a fetch or a submission in the editor. Only the
/// message reaches the user.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Name is required")]
    NameRequired,
    #[error("Door ID is missing")]
    MissingId,
    #[error(transparent)]
    Api(#[from] ApiError),
}
