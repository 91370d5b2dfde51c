use reqwest::StatusCode;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Everything that may go wrong while talking to the Data Manager.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The appliance rejected the credentials or the token (HTTP 401 or 403).
    #[error("authentication failed on `{endpoint}`")]
    Authentication { endpoint: String },

    /// Timeout, DNS failure, refused or reset connection.
    #[error("communication error on `{endpoint}`: {message}")]
    Communication { endpoint: String, message: String },

    /// The response has an unexpected shape.
    #[error("failed to parse {what}: {message}")]
    Parsing { what: &'static str, message: String },

    /// Any other non-successful HTTP status.
    #[error("`{endpoint}` responded with {status}")]
    Status { endpoint: String, status: StatusCode },

    /// Unclassified failure.
    #[error("{0}")]
    Client(String),

    /// The client is not configured for the requested operation.
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    /// An authenticated operation was requested without an active session.
    #[error("no active session")]
    NoSession,

    #[error("no values available for `{channel_id}@{component_id}`")]
    NoValues { channel_id: String, component_id: String },
}

impl Error {
    pub(crate) fn parsing(what: &'static str, error: impl ToString) -> Self {
        Self::Parsing { what, message: error.to_string() }
    }

    /// Whether the request may simply be sent again.
    ///
    /// Authentication failures are handled by re-authenticating instead.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Communication { .. }
            | Self::Parsing { .. }
            | Self::Status { .. }
            | Self::Client(_) => true,
            Self::Authentication { .. }
            | Self::Configuration(_)
            | Self::NoSession
            | Self::NoValues { .. } => false,
        }
    }

    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
