use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DictionaryError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            DictionaryError::Io { path, .. } => path,
            DictionaryError::Json { path, .. } => path,
        }
    }

    /// Whether the file simply does not exist, as opposed to being unreadable
    /// or malformed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DictionaryError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
