use std::fmt;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

pub const CONNECT_FALLBACK_MESSAGE: &str =
    "Failed to connect to backend. Make sure the server is running on port 8080.";

/// Why a submission ended in `Phase::Failed`.
///
/// The kind is only kept until the failure reaches the state; the view sees
/// nothing but the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Input was empty after trimming. Never reaches the network.
    Validation,
    /// The service answered with a non-success status.
    Service { status: u16 },
    /// No response could be obtained (or its body could not be read).
    Transport { message: Option<String> },
}

impl SubmitFailure {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitFailure::Validation => f.write_str(EMPTY_INPUT_MESSAGE),
            SubmitFailure::Service { status } => write!(f, "Server error: {status}"),
            SubmitFailure::Transport { message } => match message.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => f.write_str(text),
                _ => f.write_str(CONNECT_FALLBACK_MESSAGE),
            },
        }
    }
}
