/// Error type for endpoint fetch/decode failures.
///
/// Every failure is recoverable: the controller logs it and surfaces a
/// status message, never a crash and never an automatic retry.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn display_uses_message_and_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let err = ApiError::with_source("prediction fetch failed", inner);
        assert_eq!(err.to_string(), "prediction fetch failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
