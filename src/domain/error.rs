use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    ElementNotFound(String),
    NoWindow,
    Dom(String),
    Serialization(String),
    Http(String),
    InvalidResponse(String),
    Config(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ElementNotFound(id) => write!(f, "Element not found: {id}"),
            FrameError::NoWindow => write!(f, "No window available in this context"),
            FrameError::Dom(msg) => write!(f, "DOM Error: {msg}"),
            FrameError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            FrameError::Http(msg) => write!(f, "HTTP Error: {msg}"),
            FrameError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
            FrameError::Config(msg) => write!(f, "Configuration Error: {msg}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl FrameError {
    pub fn dom(message: impl Into<String>) -> Self {
        FrameError::Dom(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        FrameError::Serialization(message.into())
    }

    pub fn http(message: impl Into<String>) -> Self {
        FrameError::Http(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        FrameError::InvalidResponse(message.into())
    }
}
