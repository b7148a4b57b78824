use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("{0} is required")]
    MissingInput(&'static str),

    #[error("Template: {template_id} not found")]
    TemplateNotFound { template_id: u64 },

    #[error("Group: {0} not found")]
    GroupNotFound(String),

    #[error("Error {context}: {status}")]
    UnexpectedStatus {
        context: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Error creating item: {message} ({status})")]
    ItemRejected { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status observed when the error was raised, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::TemplateNotFound { .. } => Some(StatusCode::NOT_FOUND),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::ItemRejected { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::TemplateNotFound { .. } | ClientError::GroupNotFound(_)
        ) || self.status() == Some(StatusCode::NOT_FOUND)
    }
}
