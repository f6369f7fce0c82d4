/// Fatal error taxonomy for a run.
///
/// Every variant aborts the run; there is no retry or partial-output path.
/// The exit code is surfaced by `main` so scripts can tell a network failure
/// apart from an API-level rejection.
#[derive(Clone)]
pub enum AppError {
    /// Network/HTTP failure reaching or receiving from the endpoint,
    /// including an undecodable response body.
    Transport(String),
    /// Endpoint reachable but its payload reports a non-"OK" status.
    /// Carries the raw response body for diagnostics.
    Api { raw: String },
    /// Terminal/chart rendering failure.
    Render(String),
}

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Transport(_) => 3,
            AppError::Api { .. } => 4,
            AppError::Render(_) => 5,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Transport(msg) => write!(f, "{msg}"),
            AppError::Api { raw } => write!(f, "Codeforces API error: {raw}"),
            AppError::Render(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code())
            .field("message", &self.to_string())
            .finish()
    }
}

impl std::error::Error for AppError {}
