use thiserror::Error;

/// Reasons a session refuses to start.
/// The session stays in its previous state when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a session is already running")]
    AlreadyRunning,
    #[error("no phrase lists are configured")]
    NoPhraseLists,
    #[error("every configured phrase list is empty")]
    NoPhrases,
}

/// Errors loading a phrase catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid phrase catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("phrase {index} in list '{theme}' has no letters")]
    EmptyPhrase { theme: String, index: usize },
}
