use thiserror::Error;

/// Failure of a single call against the file server.
///
/// Every transfer operation reports failures through this one type so the
/// handlers have a single channel to turn into notifications.
#[derive(Debug, Error)]
pub enum TransferError {
    /// No HTTP response was received (connect, DNS, timeout, broken body)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered `success: false` with its own message
    #[error("{0}")]
    Application(String),

    /// Non-success status without a readable envelope
    #[error("server returned HTTP {status}")]
    Server { status: u16 },

    /// Success status but the body did not match the contract
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Reading an upload source or writing a download target failed
    #[error("{path}: {source}")]
    LocalFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The upload task ended without reporting a result
    #[error("upload task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Application,
    Other,
}

/// Classify an error based on its variant and message
pub fn classify_error(error: &TransferError) -> ErrorKind {
    match error {
        TransferError::Application(_) => ErrorKind::Application,
        TransferError::Server { status } => match status {
            404 => ErrorKind::NotFound,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::Other,
        },
        TransferError::Transport(e) => {
            if e.is_timeout() {
                return ErrorKind::Timeout;
            }
            classify_message(&format_error_message(error))
        }
        _ => ErrorKind::Other,
    }
}

fn classify_message(message: &str) -> ErrorKind {
    let message = message.to_lowercase();

    if message.contains("connection refused") {
        return ErrorKind::ConnectionRefused;
    }
    if message.contains("timeout") || message.contains("timed out") {
        return ErrorKind::Timeout;
    }
    if message.contains("dns") || message.contains("network") {
        return ErrorKind::NetworkError;
    }

    ErrorKind::Other
}

/// Format an error for a notification.
///
/// Transport errors are reported by their deepest cause (reqwest's top-level
/// message is just "error sending request"); everything else by its display.
pub fn format_error_message(error: &TransferError) -> String {
    match error {
        TransferError::Transport(e) => {
            let mut deepest = e.to_string();
            let mut source = std::error::Error::source(e);
            while let Some(err) = source {
                deepest = err.to_string();
                source = err.source();
            }
            deepest
        }
        other => other.to_string(),
    }
}
