//! Error types for port operations.

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ImageGenError {
    #[error("Drawing failed: {0}")]
    DrawingFailed(String),
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<image::ImageError> for ImageGenError {
    fn from(err: image::ImageError) -> Self {
        Self::EncodingFailed(err.to_string())
    }
}

/// Asset storage errors with the file that failed, for actionable logs.
#[derive(Debug, thiserror::Error)]
pub enum AssetStoreError {
    #[error("Failed to prepare asset directory {dir}: {message}")]
    Directory { dir: String, message: String },

    #[error("Failed to write asset {filename}: {message}")]
    Write { filename: String, message: String },
}

impl AssetStoreError {
    pub fn directory(dir: impl ToString, message: impl ToString) -> Self {
        Self::Directory {
            dir: dir.to_string(),
            message: message.to_string(),
        }
    }

    pub fn write(filename: impl ToString, message: impl ToString) -> Self {
        Self::Write {
            filename: filename.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_store_error_names_the_file() {
        let err = AssetStoreError::write("npc_0badf00d.png", "disk full");
        assert_eq!(
            err.to_string(),
            "Failed to write asset npc_0badf00d.png: disk full"
        );
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::RequestFailed("429 Too Many Requests".to_string());
        assert!(err.to_string().contains("429"));
    }
}
