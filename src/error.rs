//! Custom error types for xmlstructdiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{path} not found.")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress {path}: {source}")]
    DecompressError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    EncodingError {
        path: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to parse {path}: {source}")]
    XmlError {
        path: String,
        #[source]
        source: roxmltree::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StructDiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn decompress_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::DecompressError {
            path: path.into(),
            source,
        }
    }

    pub fn encoding_error(path: impl Into<String>, source: std::str::Utf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    pub fn xml_error(path: impl Into<String>, source: roxmltree::Error) -> Self {
        Self::XmlError {
            path: path.into(),
            source,
        }
    }

    /// Returns the path of the file this error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::FileNotFound { path }
            | Self::ReadError { path, .. }
            | Self::DecompressError { path, .. }
            | Self::EncodingError { path, .. }
            | Self::XmlError { path, .. } => path,
        }
    }

    /// True for failures caused by the document content rather than the file system.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::EncodingError { .. } | Self::XmlError { .. })
    }
}
