/// The graphics context could not be created for the window.
///
/// Fatal: the runtime stops instead of retrying.
#[derive(Debug, Clone, thiserror::Error)]
#[error("graphics context unavailable: {reason}")]
pub struct ContextUnavailable {
    pub reason: String,
}

impl ContextUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
